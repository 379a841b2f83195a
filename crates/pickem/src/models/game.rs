use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    Scheduled,
    Final,
    /// The game never started. Terminal, like `Final`.
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FinalScore {
    pub home_points: u16,
    pub away_points: u16,
}

impl FinalScore {
    pub fn total(&self) -> u32 {
        u32::from(self.home_points) + u32::from(self.away_points)
    }
}

/// A slate game between two teams in a given week.
///
/// Ranks are snapshotted when the game is ingested, so later poll movement
/// does not change who counted as a top-10 opponent on game day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Game {
    pub game_id: String,
    pub week: u32,
    pub home_team_id: String,
    pub away_team_id: String,
    pub home_rank: Option<u8>,
    pub away_rank: Option<u8>,
    pub kickoff: DateTime<Utc>,
    pub status: GameStatus,
    /// Set only once the game is `Final`; always one of the two participants.
    pub winner_team_id: Option<String>,
    pub final_score: Option<FinalScore>,
    pub over_under: Option<Decimal>,
    pub updated_at: DateTime<Utc>,
}

impl Game {
    pub fn is_participant(&self, team_id: &str) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    /// Picks lock at kickoff, and a game that is no longer scheduled never reopens.
    pub fn is_locked(&self, now: DateTime<Utc>) -> bool {
        now >= self.kickoff || self.status != GameStatus::Scheduled
    }

    pub fn is_final(&self) -> bool {
        self.status == GameStatus::Final
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == GameStatus::Cancelled
    }

    /// Rank of the team `team_id` played against, if that opponent was ranked.
    pub fn opponent_rank(&self, team_id: &str) -> Option<u8> {
        if team_id == self.home_team_id {
            self.away_rank
        } else if team_id == self.away_team_id {
            self.home_rank
        } else {
            None
        }
    }

    pub fn winner(&self) -> Option<&str> {
        match self.status {
            GameStatus::Final => self.winner_team_id.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn game() -> Game {
        Game {
            game_id: "g1".into(),
            week: 1,
            home_team_id: "uga".into(),
            away_team_id: "bama".into(),
            home_rank: Some(3),
            away_rank: None,
            kickoff: Utc.with_ymd_and_hms(2025, 9, 6, 19, 30, 0).unwrap(),
            status: GameStatus::Scheduled,
            winner_team_id: None,
            final_score: None,
            over_under: None,
            updated_at: Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_locks_at_kickoff() {
        let g = game();
        assert!(!g.is_locked(g.kickoff - Duration::seconds(1)));
        assert!(g.is_locked(g.kickoff));
        assert!(g.is_locked(g.kickoff + Duration::minutes(5)));
    }

    #[test]
    fn test_cancelled_game_is_locked_before_kickoff() {
        let mut g = game();
        g.status = GameStatus::Cancelled;
        assert!(g.is_locked(g.kickoff - Duration::days(1)));
    }

    #[test]
    fn test_opponent_rank() {
        let g = game();
        assert_eq!(g.opponent_rank("bama"), Some(3));
        assert_eq!(g.opponent_rank("uga"), None);
        assert_eq!(g.opponent_rank("osu"), None);
    }

    #[test]
    fn test_winner_only_when_final() {
        let mut g = game();
        g.winner_team_id = Some("uga".into());
        assert_eq!(g.winner(), None);
        g.status = GameStatus::Final;
        assert_eq!(g.winner(), Some("uga"));
    }
}
