use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lowest rank that still counts as a top-25 team.
pub const MAX_POLL_RANK: u8 = 25;

/// Teams ranked at or above this rank count as top-10 opponents for tie-breaks.
pub const TOP_TEN_CUTOFF: u8 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Team {
    pub team_id: String,
    pub name: String,
    /// Current poll rank; `None` for unranked opponents.
    pub rank: Option<u8>,
    pub updated_at: DateTime<Utc>,
}

impl Team {
    pub fn is_ranked(&self) -> bool {
        self.rank.is_some()
    }
}

/// Whether a poll rank falls in the top ten.
pub fn is_top_ten(rank: Option<u8>) -> bool {
    matches!(rank, Some(r) if r <= TOP_TEN_CUTOFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_ten_boundaries() {
        assert!(is_top_ten(Some(1)));
        assert!(is_top_ten(Some(10)));
        assert!(!is_top_ten(Some(11)));
        assert!(!is_top_ten(None));
    }
}
