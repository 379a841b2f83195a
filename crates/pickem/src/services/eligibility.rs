use chrono::{DateTime, Utc};

use crate::database::Tables;
use crate::error::{PickemError, Result};
use crate::models::{Game, Pick, ScoringPolicy};

/// A pick about to be written, checked before it touches the tables.
pub(crate) struct PickDraft<'a> {
    pub user_id: &'a str,
    pub game: &'a Game,
    pub chosen_team_id: &'a str,
    pub confidence: Option<u32>,
    /// The stored pick this draft overwrites, if any.
    pub replacing: Option<&'a Pick>,
}

/// Kickoff window first, then the chosen team, then confidence weights.
pub(crate) fn check_pick(
    tables: &Tables,
    policy: ScoringPolicy,
    draft: &PickDraft<'_>,
    now: DateTime<Utc>,
) -> Result<()> {
    let game = draft.game;

    if game.is_locked(now) {
        return Err(PickemError::PickWindowClosed {
            game_id: game.game_id.clone(),
            kickoff: game.kickoff,
        });
    }

    if !game.is_participant(draft.chosen_team_id) {
        return Err(PickemError::InvalidTeam {
            game_id: game.game_id.clone(),
            team_id: draft.chosen_team_id.to_string(),
        });
    }

    if policy.is_weighted() {
        check_confidence(tables, draft)?;
    }

    Ok(())
}

fn check_confidence(tables: &Tables, draft: &PickDraft<'_>) -> Result<()> {
    let week = draft.game.week;
    let confidence = draft.confidence.ok_or_else(|| {
        PickemError::InvalidConfidence("a confidence weight is required".to_string())
    })?;

    // A pick keeping its weight stays valid even if the slate shrank since.
    let keeps_own_weight = draft
        .replacing
        .is_some_and(|pick| pick.confidence == Some(confidence));
    if keeps_own_weight {
        return Ok(());
    }

    let slate_size = tables.games_in_week(week) as u32;
    if confidence == 0 || confidence > slate_size {
        return Err(PickemError::InvalidConfidence(format!(
            "confidence must be between 1 and {} for week {}",
            slate_size, week
        )));
    }

    if tables.confidence_taken(draft.user_id, week, confidence) {
        return Err(PickemError::DuplicateConfidence { week, confidence });
    }

    Ok(())
}
