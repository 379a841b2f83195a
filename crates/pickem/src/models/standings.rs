use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StandingsRow {
    /// Competition rank (1, 1, 3, ...).
    pub rank: u32,
    pub user_id: String,
    pub total_points: u32,
    pub correct_picks: u32,
    /// Correct picks against an opponent ranked in the top ten.
    pub top_ten_wins: u32,
    pub picks_submitted: u32,
    /// Rank through the previous week, when the user was on that board.
    pub previous_rank: Option<u32>,
}
