use chrono::Utc;
use pickem::{
    Database,
    dto::{
        game::{RecordResultRequest, RecordResultResponse, UpsertGameRequest},
        team::UpsertTeamRequest,
    },
    error::Result,
    models::{Game, ScoreEntry, Team},
    repository::{game::GameRepository, score::ScoreRepository},
};

/// Get a game by id
pub async fn get_game(db: &Database, game_id: &str) -> Result<Game> {
    let repo = GameRepository::new(db);
    repo.find_by_id(game_id).await
}

/// List the slate of a week in kickoff order
pub async fn list_games_for_week(db: &Database, week: u32) -> Result<Vec<Game>> {
    let repo = GameRepository::new(db);
    repo.list_for_week(week).await
}

pub async fn get_team(db: &Database, team_id: &str) -> Result<Team> {
    let repo = GameRepository::new(db);
    repo.find_team(team_id).await
}

pub async fn list_ranked_teams(db: &Database) -> Result<Vec<Team>> {
    let repo = GameRepository::new(db);
    repo.list_ranked_teams().await
}

pub async fn upsert_team(db: &Database, request: &UpsertTeamRequest) -> Result<Team> {
    let repo = GameRepository::new(db);
    repo.upsert_team(request, Utc::now()).await
}

pub async fn upsert_game(db: &Database, request: &UpsertGameRequest) -> Result<Game> {
    let repo = GameRepository::new(db);
    repo.upsert_game(request, Utc::now()).await
}

/// Record a final result and score the game's picks
pub async fn record_result(
    db: &Database,
    game_id: &str,
    request: &RecordResultRequest,
) -> Result<RecordResultResponse> {
    let repo = GameRepository::new(db);
    repo.record_result(game_id, request, Utc::now()).await
}

pub async fn cancel_game(db: &Database, game_id: &str) -> Result<Game> {
    let repo = GameRepository::new(db);
    repo.cancel(game_id, Utc::now()).await
}

pub async fn rescore_game(db: &Database, game_id: &str) -> Result<Vec<ScoreEntry>> {
    let repo = ScoreRepository::new(db);
    repo.rescore_game(game_id).await
}
