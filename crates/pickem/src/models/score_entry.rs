use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Points a pick earned once its game went final. Keyed by `pick_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScoreEntry {
    pub pick_id: Uuid,
    pub user_id: String,
    pub game_id: String,
    pub week: u32,
    pub correct: bool,
    /// Winner points; zero whenever `correct` is false.
    pub points: u32,
    pub over_under_points: u32,
    /// Poll rank of the team the user picked against, at game time.
    pub opponent_rank: Option<u8>,
}

impl ScoreEntry {
    pub fn total(&self) -> u32 {
        self.points + self.over_under_points
    }

    pub fn beat_top_ten(&self) -> bool {
        self.correct && super::team::is_top_ten(self.opponent_rank)
    }
}
