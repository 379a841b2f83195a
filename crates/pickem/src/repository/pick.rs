use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::Database;
use crate::database::Tables;
use crate::dto::pick::{SubmitPickRequest, UpdatePickRequest};
use crate::error::{PickemError, Result};
use crate::models::{Pick, ScoringPolicy};
use crate::services::eligibility::{self, PickDraft};

/// Pick Store: one pick per user per game, writable until kickoff.
pub struct PickRepository<'a> {
    db: &'a Database,
}

impl<'a> PickRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Submit a pick. A second submission for the same game overwrites the
    /// first one in place, so the last write before kickoff wins.
    pub async fn submit(
        &self,
        user_id: &str,
        req: &SubmitPickRequest,
        now: DateTime<Utc>,
    ) -> Result<Pick> {
        let policy = self.db.config().scoring_policy;
        let mut tables = self.db.write().await;

        let key = (user_id.to_string(), req.game_id.clone());
        match tables.pick_keys.get(&key).copied() {
            Some(pick_id) => overwrite(&mut tables, policy, pick_id, &UpdatePickRequest::from(req), now),
            None => insert(&mut tables, policy, user_id, req, now),
        }
    }

    /// Overwrite a pick owned by `user_id`. Someone else's pick is `NotFound`.
    pub async fn update(
        &self,
        pick_id: Uuid,
        user_id: &str,
        req: &UpdatePickRequest,
        now: DateTime<Utc>,
    ) -> Result<Pick> {
        let policy = self.db.config().scoring_policy;
        let mut tables = self.db.write().await;

        match tables.picks.get(&pick_id) {
            Some(pick) if pick.user_id == user_id => {}
            _ => return Err(PickemError::NotFound),
        }

        overwrite(&mut tables, policy, pick_id, req, now)
    }

    pub async fn find_by_id(&self, pick_id: Uuid) -> Result<Pick> {
        let tables = self.db.read().await;
        tables.picks.get(&pick_id).cloned().ok_or(PickemError::NotFound)
    }

    /// A user's picks for one week, in kickoff order.
    pub async fn list_for_user(&self, user_id: &str, week: u32) -> Result<Vec<Pick>> {
        let tables = self.db.read().await;
        let mut picks: Vec<(DateTime<Utc>, Pick)> = tables
            .picks
            .values()
            .filter(|p| p.user_id == user_id && p.week == week)
            .map(|p| {
                let kickoff = tables.games.get(&p.game_id).map(|g| g.kickoff).unwrap_or(p.submitted_at);
                (kickoff, p.clone())
            })
            .collect();
        picks.sort_by(|(ka, a), (kb, b)| ka.cmp(kb).then_with(|| a.game_id.cmp(&b.game_id)));

        Ok(picks.into_iter().map(|(_, p)| p).collect())
    }

    pub async fn list_for_game(&self, game_id: &str) -> Result<Vec<Pick>> {
        let tables = self.db.read().await;
        tables.game(game_id)?;

        let mut picks: Vec<Pick> = tables.picks_for_game(game_id).cloned().collect();
        picks.sort_by(|a, b| a.user_id.cmp(&b.user_id));

        Ok(picks)
    }
}

fn insert(
    tables: &mut Tables,
    policy: ScoringPolicy,
    user_id: &str,
    req: &SubmitPickRequest,
    now: DateTime<Utc>,
) -> Result<Pick> {
    let game = tables.game(&req.game_id)?.clone();

    let draft = PickDraft {
        user_id,
        game: &game,
        chosen_team_id: &req.chosen_team_id,
        confidence: req.confidence,
        replacing: None,
    };
    eligibility::check_pick(tables, policy, &draft, now)?;

    let pick = Pick {
        pick_id: Uuid::new_v4(),
        user_id: user_id.to_string(),
        game_id: game.game_id.clone(),
        week: game.week,
        chosen_team_id: req.chosen_team_id.clone(),
        confidence: req.confidence,
        total_pick: req.total_pick,
        line_at_pick: game.over_under,
        version: 1,
        created_at: now,
        submitted_at: now,
    };

    if let Some(confidence) = pick.confidence {
        tables.reserve_confidence(user_id, pick.week, confidence);
    }
    tables
        .pick_keys
        .insert((pick.user_id.clone(), pick.game_id.clone()), pick.pick_id);
    tables.picks.insert(pick.pick_id, pick.clone());

    debug!(pick_id = %pick.pick_id, user_id, game_id = %pick.game_id, "Pick submitted");

    Ok(pick)
}

fn overwrite(
    tables: &mut Tables,
    policy: ScoringPolicy,
    pick_id: Uuid,
    req: &UpdatePickRequest,
    now: DateTime<Utc>,
) -> Result<Pick> {
    let current = tables.picks.get(&pick_id).cloned().ok_or(PickemError::NotFound)?;
    let game = tables.game(&current.game_id)?.clone();

    let draft = PickDraft {
        user_id: &current.user_id,
        game: &game,
        chosen_team_id: &req.chosen_team_id,
        confidence: req.confidence,
        replacing: Some(&current),
    };
    eligibility::check_pick(tables, policy, &draft, now)?;

    if let Some(expected) = req.expected_version
        && expected != current.version
    {
        warn!(%pick_id, expected, current = current.version, "Rejected stale pick write");
        return Err(PickemError::Conflict {
            expected,
            current: current.version,
        });
    }

    if let Some(old) = current.confidence {
        tables.release_confidence(&current.user_id, current.week, old);
    }
    if let Some(new) = req.confidence {
        tables.reserve_confidence(&current.user_id, current.week, new);
    }

    let updated = Pick {
        chosen_team_id: req.chosen_team_id.clone(),
        confidence: req.confidence,
        total_pick: req.total_pick,
        line_at_pick: game.over_under,
        version: current.version + 1,
        submitted_at: now,
        ..current
    };
    tables.picks.insert(pick_id, updated.clone());
    tables.scores.remove(&pick_id);

    debug!(%pick_id, version = updated.version, "Pick overwritten");

    Ok(updated)
}
