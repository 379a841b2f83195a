//! Test season builder shared by the repository tests.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::dto::game::{RecordResultRequest, RecordResultResponse, UpsertGameRequest};
use crate::dto::pick::SubmitPickRequest;
use crate::dto::team::UpsertTeamRequest;
use crate::error::Result;
use crate::models::{Game, Pick, ScoringPolicy, Team};
use crate::{Database, PickemConfig};

use super::game::GameRepository;
use super::pick::PickRepository;
use super::score::ScoreRepository;
use super::standings::StandingsRepository;

const TEAMS: &[(&str, &str, Option<u8>)] = &[
    ("uga", "Georgia", Some(1)),
    ("osu", "Ohio State", Some(2)),
    ("bama", "Alabama", Some(4)),
    ("mich", "Michigan", None),
    ("lsu", "LSU", None),
    ("ttu", "Texas Tech", None),
];

/// Saturday of `week` at `hour`:00 UTC. Week 0 is the preseason Saturday.
pub(crate) fn at(week: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 30, 0, 0, 0).unwrap() + Duration::weeks(i64::from(week) - 1)
        + Duration::hours(i64::from(hour))
}

pub(crate) struct Season {
    pub db: Database,
}

impl Season {
    pub async fn straight() -> Self {
        Self::with_policy(ScoringPolicy::Straight).await
    }

    pub async fn confidence() -> Self {
        Self::with_policy(ScoringPolicy::Confidence).await
    }

    async fn with_policy(policy: ScoringPolicy) -> Self {
        let season = Self {
            db: Database::new(PickemConfig::new(policy)),
        };
        for (team_id, name, rank) in TEAMS {
            let req = UpsertTeamRequest {
                team_id: team_id.to_string(),
                name: name.to_string(),
                rank: *rank,
            };
            season.games().upsert_team(&req, at(0, 0)).await.unwrap();
        }
        season
    }

    pub fn games(&self) -> GameRepository<'_> {
        GameRepository::new(&self.db)
    }

    pub fn picks(&self) -> PickRepository<'_> {
        PickRepository::new(&self.db)
    }

    pub fn scores(&self) -> ScoreRepository<'_> {
        ScoreRepository::new(&self.db)
    }

    pub fn standings(&self) -> StandingsRepository<'_> {
        StandingsRepository::new(&self.db)
    }

    pub async fn team(&self, team_id: &str, rank: Option<u8>) -> Team {
        let req = UpsertTeamRequest {
            team_id: team_id.to_string(),
            name: team_id.to_uppercase(),
            rank,
        };
        self.games().upsert_team(&req, at(0, 0)).await.unwrap()
    }

    pub fn game_request(
        &self,
        game_id: &str,
        week: u32,
        home: &str,
        away: &str,
        kickoff: DateTime<Utc>,
    ) -> UpsertGameRequest {
        UpsertGameRequest {
            game_id: game_id.to_string(),
            week,
            home_team_id: home.to_string(),
            away_team_id: away.to_string(),
            kickoff,
            over_under: None,
        }
    }

    pub async fn game(
        &self,
        game_id: &str,
        week: u32,
        home: &str,
        away: &str,
        kickoff: DateTime<Utc>,
    ) -> Game {
        let req = self.game_request(game_id, week, home, away, kickoff);
        self.games().upsert_game(&req, at(0, 0)).await.unwrap()
    }

    /// Submit a pick during preseason, well before any kickoff.
    pub async fn pick(
        &self,
        user_id: &str,
        game_id: &str,
        team_id: &str,
        confidence: Option<u32>,
    ) -> Result<Pick> {
        self.pick_at(user_id, game_id, team_id, confidence, at(0, 6)).await
    }

    pub async fn pick_at(
        &self,
        user_id: &str,
        game_id: &str,
        team_id: &str,
        confidence: Option<u32>,
        now: DateTime<Utc>,
    ) -> Result<Pick> {
        let req = SubmitPickRequest {
            game_id: game_id.to_string(),
            chosen_team_id: team_id.to_string(),
            confidence,
            total_pick: None,
        };
        self.picks().submit(user_id, &req, now).await
    }

    pub async fn result(&self, game_id: &str, winner: &str) -> Result<RecordResultResponse> {
        let req = RecordResultRequest {
            winner_team_id: winner.to_string(),
            home_points: None,
            away_points: None,
        };
        self.games().record_result(game_id, &req, at(20, 0)).await
    }
}
