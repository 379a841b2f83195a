use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TotalPick {
    Over,
    Under,
}

/// A user's selection for one game. Read-only once the game kicks off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Pick {
    pub pick_id: Uuid,
    pub user_id: String,
    pub game_id: String,
    pub week: u32,
    pub chosen_team_id: String,
    pub confidence: Option<u32>,
    pub total_pick: Option<TotalPick>,
    /// Over/under line of the game when the pick was last written.
    pub line_at_pick: Option<Decimal>,
    /// Incremented on every overwrite; used for optimistic concurrency.
    pub version: u32,
    pub created_at: DateTime<Utc>,
    pub submitted_at: DateTime<Utc>,
}
