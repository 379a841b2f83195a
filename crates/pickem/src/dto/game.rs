use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{FinalScore, Game, ScoreEntry};

/// Game record pushed by the schedule feed
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertGameRequest {
    #[validate(length(min = 1, max = 64))]
    pub game_id: String,

    #[validate(range(min = 1, message = "week must be >= 1"))]
    pub week: u32,

    #[validate(length(min = 1, max = 64))]
    pub home_team_id: String,

    #[validate(length(min = 1, max = 64))]
    pub away_team_id: String,

    pub kickoff: DateTime<Utc>,

    pub over_under: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordResultRequest {
    #[validate(length(min = 1, max = 64))]
    pub winner_team_id: String,

    pub home_points: Option<u16>,

    pub away_points: Option<u16>,
}

impl RecordResultRequest {
    /// Final score when both sides were reported.
    pub fn final_score(&self) -> Result<Option<FinalScore>, &'static str> {
        match (self.home_points, self.away_points) {
            (Some(home_points), Some(away_points)) => Ok(Some(FinalScore {
                home_points,
                away_points,
            })),
            (None, None) => Ok(None),
            _ => Err("home_points and away_points must be given together"),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecordResultResponse {
    pub game: Game,
    /// False when the same result had already been recorded.
    pub newly_final: bool,
    pub scores: Vec<ScoreEntry>,
}
