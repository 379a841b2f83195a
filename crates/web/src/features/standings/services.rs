use chrono::Utc;
use pickem::{
    Database,
    dto::standings::StandingsFilter,
    error::Result,
    models::{ScoreEntry, StandingsRow},
    repository::{score::ScoreRepository, standings::StandingsRepository},
};
use uuid::Uuid;

/// Get standings with pagination
pub async fn get_standings(
    db: &Database,
    filter: &StandingsFilter,
) -> Result<(Vec<StandingsRow>, u64)> {
    let repo = StandingsRepository::new(db);
    repo.get_standings(filter, Utc::now()).await
}

pub async fn get_score_for_pick(db: &Database, pick_id: Uuid) -> Result<ScoreEntry> {
    let repo = ScoreRepository::new(db);
    repo.find_by_pick(pick_id).await
}

pub async fn list_scores_for_game(db: &Database, game_id: &str) -> Result<Vec<ScoreEntry>> {
    let repo = ScoreRepository::new(db);
    repo.list_for_game(game_id).await
}

pub async fn list_scores_for_user(
    db: &Database,
    user_id: &str,
    week: Option<u32>,
) -> Result<Vec<ScoreEntry>> {
    let repo = ScoreRepository::new(db);
    repo.list_for_user(user_id, week).await
}
