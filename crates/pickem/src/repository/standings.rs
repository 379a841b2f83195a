use chrono::{DateTime, Utc};

use crate::Database;
use crate::dto::standings::StandingsFilter;
use crate::error::Result;
use crate::models::StandingsRow;
use crate::services::leaderboard;

pub struct StandingsRepository<'a> {
    db: &'a Database,
}

impl<'a> StandingsRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Full standings through `through_week`, or through the current week.
    ///
    /// Computed from one read snapshot; nothing is cached.
    pub async fn compute(
        &self,
        through_week: Option<u32>,
        now: DateTime<Utc>,
    ) -> Result<Vec<StandingsRow>> {
        let policy = self.db.config().scoring_policy;
        let tables = self.db.read().await;

        let Some(week) = through_week.or_else(|| leaderboard::current_week(&tables, now)) else {
            return Ok(Vec::new());
        };

        Ok(leaderboard::compute_standings(&tables, week, policy))
    }

    /// One page of standings plus the total number of rows.
    pub async fn get_standings(
        &self,
        filter: &StandingsFilter,
        now: DateTime<Utc>,
    ) -> Result<(Vec<StandingsRow>, u64)> {
        let rows = self.compute(filter.through_week, now).await?;
        let total_items = rows.len() as u64;

        Ok((filter.pagination().apply(rows), total_items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::game::RecordResultRequest;
    use crate::dto::pick::SubmitPickRequest;
    use crate::models::TotalPick;
    use crate::repository::fixtures::{Season, at};
    use crate::repository::game::GameRepository;
    use rust_decimal::Decimal;

    fn summary(rows: &[StandingsRow]) -> Vec<(&str, u32, u32)> {
        rows.iter()
            .map(|r| (r.user_id.as_str(), r.total_points, r.rank))
            .collect()
    }

    #[tokio::test]
    async fn test_confidence_example_week() {
        // A (#3) hosts B (#7); U1 takes A for 3, U2 takes B for 5.
        let season = Season::confidence().await;
        season.team("a", Some(3)).await;
        season.team("b", Some(7)).await;
        season.game("G1", 1, "a", "b", at(1, 12)).await;
        for (i, (home, away)) in [("uga", "bama"), ("osu", "mich"), ("lsu", "ttu"), ("uga", "osu")]
            .into_iter()
            .enumerate()
        {
            season.game(&format!("filler{i}"), 1, home, away, at(1, 15)).await;
        }

        season.pick("U1", "G1", "a", Some(3)).await.unwrap();
        season.pick("U2", "G1", "b", Some(5)).await.unwrap();
        let recorded = season.result("G1", "a").await.unwrap();

        let points: Vec<(&str, u32)> = recorded
            .scores
            .iter()
            .map(|s| (s.user_id.as_str(), s.points))
            .collect();
        assert_eq!(points, vec![("U1", 3), ("U2", 0)]);

        let rows = season.standings().compute(Some(1), at(1, 23)).await.unwrap();
        assert_eq!(summary(&rows), vec![("U1", 3, 1), ("U2", 0, 2)]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_standings_never_see_a_partly_scored_game() {
        let season = Season::straight().await;
        season.game("g1", 1, "uga", "bama", at(1, 12)).await;
        for i in 0..20 {
            season.pick(&format!("user{i:02}"), "g1", "uga", None).await.unwrap();
        }

        let writer = {
            let db = season.db.clone();
            tokio::spawn(async move {
                let req = RecordResultRequest {
                    winner_team_id: "uga".into(),
                    home_points: None,
                    away_points: None,
                };
                GameRepository::new(&db).record_result("g1", &req, at(1, 16)).await
            })
        };
        let reader = {
            let db = season.db.clone();
            tokio::spawn(async move {
                let mut snapshots = Vec::new();
                for _ in 0..50 {
                    let rows = StandingsRepository::new(&db)
                        .compute(Some(1), at(1, 16))
                        .await
                        .unwrap();
                    snapshots.push(rows.iter().map(|r| r.total_points).collect::<Vec<u32>>());
                    tokio::task::yield_now().await;
                }
                snapshots
            })
        };

        let (written, snapshots) = tokio::join!(writer, reader);
        assert!(written.unwrap().unwrap().newly_final);
        for points in snapshots.unwrap() {
            assert_eq!(points.len(), 20);
            assert!(
                points.iter().all(|&p| p == 0) || points.iter().all(|&p| p == 1),
                "partly scored snapshot: {points:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_totals_sum_score_entries_through_week() {
        let season = Season::straight().await;
        season.game("w1", 1, "uga", "bama", at(1, 12)).await;
        season.game("w2", 2, "osu", "mich", at(2, 12)).await;
        season.game("w3", 3, "lsu", "ttu", at(3, 12)).await;
        for game in ["w1", "w2", "w3"] {
            let home = season.games().find_by_id(game).await.unwrap().home_team_id;
            season.pick("alice", game, &home, None).await.unwrap();
        }
        season.result("w1", "uga").await.unwrap();
        season.result("w2", "osu").await.unwrap();
        season.result("w3", "lsu").await.unwrap();

        for week in 1..=3 {
            let rows = season.standings().compute(Some(week), at(4, 0)).await.unwrap();
            let from_entries: u32 = season
                .scores()
                .list_for_user("alice", None)
                .await
                .unwrap()
                .iter()
                .filter(|s| s.week <= week)
                .map(|s| s.total())
                .sum();
            assert_eq!(rows[0].total_points, from_entries);
            assert_eq!(rows[0].total_points, week);
        }
    }

    #[tokio::test]
    async fn test_unscored_games_count_zero() {
        let season = Season::straight().await;
        season.game("g1", 1, "uga", "bama", at(1, 12)).await;
        season.game("g2", 1, "osu", "mich", at(1, 12)).await;
        season.pick("alice", "g1", "uga", None).await.unwrap();
        season.pick("bob", "g2", "osu", None).await.unwrap();
        season.result("g1", "uga").await.unwrap();

        let rows = season.standings().compute(None, at(1, 20)).await.unwrap();
        assert_eq!(summary(&rows), vec![("alice", 1, 1), ("bob", 0, 2)]);
        assert_eq!(rows[1].picks_submitted, 1);
    }

    #[tokio::test]
    async fn test_cancelled_game_adds_nothing() {
        let season = Season::straight().await;
        season.game("g1", 1, "uga", "bama", at(1, 12)).await;
        season.game("g2", 1, "osu", "mich", at(1, 12)).await;
        season.pick("alice", "g1", "uga", None).await.unwrap();
        season.pick("alice", "g2", "osu", None).await.unwrap();
        season.games().cancel("g2", at(1, 11)).await.unwrap();
        season.result("g1", "uga").await.unwrap();

        let rows = season.standings().compute(Some(1), at(1, 20)).await.unwrap();
        assert_eq!(rows[0].total_points, 1);
        assert_eq!(rows[0].picks_submitted, 1);
    }

    #[tokio::test]
    async fn test_top_ten_tiebreak_uses_game_day_rank() {
        let season = Season::straight().await;
        // bama is #4 at kickoff
        season.game("g1", 1, "uga", "bama", at(1, 12)).await;
        season.game("g2", 1, "mich", "ttu", at(1, 12)).await;
        season.pick("zoe", "g1", "uga", None).await.unwrap();
        season.pick("adam", "g2", "mich", None).await.unwrap();
        season.result("g1", "uga").await.unwrap();
        season.result("g2", "mich").await.unwrap();
        // ttu climbs into the top ten afterwards
        season.team("ttu", Some(8)).await;

        let rows = season.standings().compute(Some(1), at(1, 20)).await.unwrap();
        assert_eq!(summary(&rows), vec![("zoe", 1, 1), ("adam", 1, 2)]);
        assert_eq!(rows[0].top_ten_wins, 1);
        assert_eq!(rows[1].top_ten_wins, 0);
    }

    #[tokio::test]
    async fn test_shared_rank_then_skip() {
        let season = Season::straight().await;
        season.game("g1", 1, "mich", "ttu", at(1, 12)).await;
        for user in ["carol", "bob", "alice"] {
            season.pick(user, "g1", "mich", None).await.unwrap();
        }
        season.pick("dave", "g1", "ttu", None).await.unwrap();
        season.result("g1", "mich").await.unwrap();

        let rows = season.standings().compute(Some(1), at(1, 20)).await.unwrap();
        assert_eq!(
            summary(&rows),
            vec![("alice", 1, 1), ("bob", 1, 1), ("carol", 1, 1), ("dave", 0, 4)]
        );
    }

    #[tokio::test]
    async fn test_over_under_bonus_counts_toward_total() {
        let season = Season::straight().await;
        let mut req = season.game_request("g1", 1, "uga", "bama", at(1, 12));
        req.over_under = Some(Decimal::new(455, 1));
        season.games().upsert_game(&req, at(0, 0)).await.unwrap();

        let submit = SubmitPickRequest {
            game_id: "g1".into(),
            chosen_team_id: "bama".into(),
            confidence: None,
            total_pick: Some(TotalPick::Over),
        };
        season.picks().submit("alice", &submit, at(0, 1)).await.unwrap();

        let result = RecordResultRequest {
            winner_team_id: "uga".into(),
            home_points: Some(31),
            away_points: Some(24),
        };
        season.games().record_result("g1", &result, at(1, 16)).await.unwrap();

        let rows = season.standings().compute(Some(1), at(1, 20)).await.unwrap();
        assert_eq!(rows[0].total_points, 1);
        assert_eq!(rows[0].correct_picks, 0);
    }

    #[tokio::test]
    async fn test_paginated_standings() {
        let season = Season::straight().await;
        season.game("g1", 1, "mich", "ttu", at(1, 12)).await;
        for user in ["u1", "u2", "u3", "u4", "u5"] {
            season.pick(user, "g1", "mich", None).await.unwrap();
        }
        season.result("g1", "mich").await.unwrap();

        let filter = StandingsFilter {
            through_week: None,
            page: 2,
            page_size: 2,
        };
        let (rows, total) = season.standings().get_standings(&filter, at(1, 20)).await.unwrap();
        assert_eq!(total, 5);
        let users: Vec<&str> = rows.iter().map(|r| r.user_id.as_str()).collect();
        assert_eq!(users, vec!["u3", "u4"]);
    }

    #[tokio::test]
    async fn test_empty_catalog_has_empty_standings() {
        let season = Season::straight().await;
        assert!(season.standings().compute(None, at(1, 0)).await.unwrap().is_empty());
    }
}
