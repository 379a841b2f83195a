use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickemError {
    #[error("Not found")]
    NotFound,

    #[error("Picks for game {game_id} closed at kickoff ({kickoff})")]
    PickWindowClosed {
        game_id: String,
        kickoff: DateTime<Utc>,
    },

    #[error("Team {team_id} is not playing in game {game_id}")]
    InvalidTeam { game_id: String, team_id: String },

    #[error("Invalid result for game {game_id}: {reason}")]
    InvalidResult { game_id: String, reason: String },

    #[error("Confidence {confidence} is already used in week {week}")]
    DuplicateConfidence { week: u32, confidence: u32 },

    #[error("Invalid confidence: {0}")]
    InvalidConfidence(String),

    #[error("Game {game_id} is already final with winner {winner_team_id}")]
    ConflictingResult {
        game_id: String,
        winner_team_id: String,
    },

    #[error("Stale write: expected version {expected}, current version is {current}")]
    Conflict { expected: u32, current: u32 },

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, PickemError>;

impl PickemError {
    /// Stable machine-readable code, surfaced to API clients next to the message.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::PickWindowClosed { .. } => "pick_window_closed",
            Self::InvalidTeam { .. } => "invalid_team",
            Self::InvalidResult { .. } => "invalid_result",
            Self::DuplicateConfidence { .. } => "duplicate_confidence",
            Self::InvalidConfidence(_) => "invalid_confidence",
            Self::ConflictingResult { .. } => "conflicting_result",
            Self::Conflict { .. } => "conflict",
            Self::ConstraintViolation(_) => "constraint_violation",
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::PickWindowClosed { .. }
                | Self::DuplicateConfidence { .. }
                | Self::ConflictingResult { .. }
                | Self::Conflict { .. }
        )
    }
}
