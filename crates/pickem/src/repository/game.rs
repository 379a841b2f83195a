use chrono::{DateTime, Utc};
use tracing::info;

use crate::Database;
use crate::dto::game::{RecordResultRequest, RecordResultResponse, UpsertGameRequest};
use crate::dto::team::UpsertTeamRequest;
use crate::error::{PickemError, Result};
use crate::models::{Game, GameStatus, MAX_POLL_RANK, ScoreEntry, Team};
use crate::services::scoring;

/// Game Catalog: teams, weekly slates and results.
pub struct GameRepository<'a> {
    db: &'a Database,
}

impl<'a> GameRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, game_id: &str) -> Result<Game> {
        let tables = self.db.read().await;
        tables.game(game_id).cloned()
    }

    /// Games of a week ordered by kickoff.
    pub async fn list_for_week(&self, week: u32) -> Result<Vec<Game>> {
        let tables = self.db.read().await;
        let mut games: Vec<Game> = tables
            .games
            .values()
            .filter(|g| g.week == week)
            .cloned()
            .collect();
        games.sort_by(|a, b| a.kickoff.cmp(&b.kickoff).then_with(|| a.game_id.cmp(&b.game_id)));

        Ok(games)
    }

    pub async fn find_team(&self, team_id: &str) -> Result<Team> {
        let tables = self.db.read().await;
        tables.team(team_id).cloned()
    }

    /// Ranked teams in poll order.
    pub async fn list_ranked_teams(&self) -> Result<Vec<Team>> {
        let tables = self.db.read().await;
        let mut teams: Vec<Team> = tables.teams.values().filter(|t| t.is_ranked()).cloned().collect();
        teams.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.name.cmp(&b.name)));

        Ok(teams)
    }

    pub async fn upsert_team(&self, req: &UpsertTeamRequest, now: DateTime<Utc>) -> Result<Team> {
        if let Some(rank) = req.rank
            && (rank == 0 || rank > MAX_POLL_RANK)
        {
            return Err(PickemError::ConstraintViolation(format!(
                "rank must be between 1 and {}",
                MAX_POLL_RANK
            )));
        }

        let team = Team {
            team_id: req.team_id.clone(),
            name: req.name.clone(),
            rank: req.rank,
            updated_at: now,
        };

        let mut tables = self.db.write().await;
        tables.teams.insert(team.team_id.clone(), team.clone());

        Ok(team)
    }

    /// Create or refresh a game from the schedule feed.
    ///
    /// Team ranks are copied onto the game while it is still scheduled. Status
    /// and result are never touched here.
    pub async fn upsert_game(&self, req: &UpsertGameRequest, now: DateTime<Utc>) -> Result<Game> {
        if req.home_team_id == req.away_team_id {
            return Err(PickemError::ConstraintViolation(
                "a team cannot play itself".to_string(),
            ));
        }

        let mut tables = self.db.write().await;

        let home_rank = known_team(tables.team(&req.home_team_id), &req.home_team_id)?.rank;
        let away_rank = known_team(tables.team(&req.away_team_id), &req.away_team_id)?.rank;
        let last_pick_at = tables
            .picks_for_game(&req.game_id)
            .map(|p| p.submitted_at)
            .max();

        let game = match tables.games.get_mut(&req.game_id) {
            Some(existing) => {
                let scheduled = existing.status == GameStatus::Scheduled;
                let matchup_changed = existing.week != req.week
                    || existing.home_team_id != req.home_team_id
                    || existing.away_team_id != req.away_team_id;

                if matchup_changed && (last_pick_at.is_some() || !scheduled) {
                    return Err(PickemError::ConstraintViolation(format!(
                        "matchup of game {} can no longer change",
                        req.game_id
                    )));
                }
                if existing.kickoff != req.kickoff {
                    if !scheduled || now >= existing.kickoff {
                        return Err(PickemError::ConstraintViolation(format!(
                            "kickoff of game {} can no longer change",
                            req.game_id
                        )));
                    }
                    // Every stored pick must still precede kickoff.
                    if let Some(last) = last_pick_at
                        && req.kickoff <= last
                    {
                        return Err(PickemError::ConstraintViolation(format!(
                            "kickoff of game {} cannot move before a submitted pick ({})",
                            req.game_id, last
                        )));
                    }
                }

                existing.week = req.week;
                existing.home_team_id = req.home_team_id.clone();
                existing.away_team_id = req.away_team_id.clone();
                existing.kickoff = req.kickoff;
                existing.over_under = req.over_under;
                if scheduled {
                    existing.home_rank = home_rank;
                    existing.away_rank = away_rank;
                }
                existing.updated_at = now;
                existing.clone()
            }
            None => {
                let game = Game {
                    game_id: req.game_id.clone(),
                    week: req.week,
                    home_team_id: req.home_team_id.clone(),
                    away_team_id: req.away_team_id.clone(),
                    home_rank,
                    away_rank,
                    kickoff: req.kickoff,
                    status: GameStatus::Scheduled,
                    winner_team_id: None,
                    final_score: None,
                    over_under: req.over_under,
                    updated_at: now,
                };
                tables.games.insert(game.game_id.clone(), game.clone());
                game
            }
        };

        Ok(game)
    }

    /// Mark a game final and score its picks in the same unit of work.
    ///
    /// Recording the winner already on file is a no-op; a different winner is
    /// rejected with `ConflictingResult`.
    pub async fn record_result(
        &self,
        game_id: &str,
        req: &RecordResultRequest,
        now: DateTime<Utc>,
    ) -> Result<RecordResultResponse> {
        let policy = self.db.config().scoring_policy;
        let invalid = |reason: String| PickemError::InvalidResult {
            game_id: game_id.to_string(),
            reason,
        };

        let final_score = req.final_score().map_err(|e| invalid(e.to_string()))?;

        let mut tables = self.db.write().await;
        let game = tables.game(game_id)?.clone();

        if !game.is_participant(&req.winner_team_id) {
            return Err(invalid(format!(
                "team {} did not play in this game",
                req.winner_team_id
            )));
        }

        match game.status {
            GameStatus::Cancelled => Err(invalid("game was cancelled".to_string())),
            GameStatus::Final => {
                let recorded = game.winner_team_id.clone().unwrap_or_default();
                if recorded != req.winner_team_id {
                    return Err(PickemError::ConflictingResult {
                        game_id: game_id.to_string(),
                        winner_team_id: recorded,
                    });
                }
                if final_score.is_some() && final_score != game.final_score {
                    return Err(invalid(format!(
                        "a different final score is already recorded ({:?})",
                        game.final_score
                    )));
                }

                let mut scores: Vec<ScoreEntry> = tables
                    .scores
                    .values()
                    .filter(|s| s.game_id == game_id)
                    .cloned()
                    .collect();
                scores.sort_by(|a, b| a.user_id.cmp(&b.user_id));

                Ok(RecordResultResponse {
                    game,
                    newly_final: false,
                    scores,
                })
            }
            GameStatus::Scheduled => {
                if let Some(score) = final_score {
                    let (winner_points, loser_points) = if req.winner_team_id == game.home_team_id {
                        (score.home_points, score.away_points)
                    } else {
                        (score.away_points, score.home_points)
                    };
                    if winner_points <= loser_points {
                        return Err(invalid(format!(
                            "winner scored {} against {}",
                            winner_points, loser_points
                        )));
                    }
                }

                let game = match tables.games.get_mut(game_id) {
                    Some(stored) => {
                        stored.status = GameStatus::Final;
                        stored.winner_team_id = Some(req.winner_team_id.clone());
                        stored.final_score = final_score;
                        stored.updated_at = now;
                        stored.clone()
                    }
                    None => return Err(PickemError::NotFound),
                };

                let scores = scoring::score_game(&mut tables, game_id, policy)?;
                info!(
                    game_id,
                    winner = %req.winner_team_id,
                    scored_picks = scores.len(),
                    "Game result recorded"
                );

                Ok(RecordResultResponse {
                    game,
                    newly_final: true,
                    scores,
                })
            }
        }
    }

    /// Cancel a game that will never be played. Its picks drop out of scoring.
    pub async fn cancel(&self, game_id: &str, now: DateTime<Utc>) -> Result<Game> {
        let policy = self.db.config().scoring_policy;
        let mut tables = self.db.write().await;

        let game = match tables.games.get_mut(game_id) {
            None => return Err(PickemError::NotFound),
            Some(game) if game.is_final() => {
                return Err(PickemError::InvalidResult {
                    game_id: game_id.to_string(),
                    reason: "game is already final".to_string(),
                });
            }
            Some(game) if game.is_cancelled() => return Ok(game.clone()),
            Some(game) => {
                game.status = GameStatus::Cancelled;
                game.updated_at = now;
                game.clone()
            }
        };

        scoring::score_game(&mut tables, game_id, policy)?;
        info!(game_id, "Game cancelled");

        Ok(game)
    }
}

fn known_team<'t>(found: Result<&'t Team>, team_id: &str) -> Result<&'t Team> {
    found.map_err(|_| PickemError::ConstraintViolation(format!("unknown team {}", team_id)))
}
