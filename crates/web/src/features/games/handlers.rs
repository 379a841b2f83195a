use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use pickem::{
    Database,
    dto::{
        game::{RecordResultRequest, RecordResultResponse, UpsertGameRequest},
        team::UpsertTeamRequest,
    },
    models::{Game, ScoreEntry, Team},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/games/{game_id}",
    params(
        ("game_id" = String, Path, description = "Game id")
    ),
    responses(
        (status = 200, description = "Game found", body = Game),
        (status = 404, description = "Game not found")
    ),
    tag = "games"
)]
pub async fn get_game(
    State(db): State<Database>,
    Path(game_id): Path<String>,
) -> Result<Response, WebError> {
    let game = services::get_game(&db, &game_id).await?;

    Ok(Json(game).into_response())
}

#[utoipa::path(
    get,
    path = "/api/weeks/{week}/games",
    params(
        ("week" = u32, Path, description = "Week number")
    ),
    responses(
        (status = 200, description = "Games of the week ordered by kickoff", body = Vec<Game>)
    ),
    tag = "games"
)]
pub async fn list_games_for_week(
    State(db): State<Database>,
    Path(week): Path<u32>,
) -> Result<Json<Vec<Game>>, WebError> {
    let games = services::list_games_for_week(&db, week).await?;

    Ok(Json(games))
}

#[utoipa::path(
    get,
    path = "/api/teams/ranked",
    responses(
        (status = 200, description = "Ranked teams in poll order", body = Vec<Team>)
    ),
    tag = "games"
)]
pub async fn list_ranked_teams(State(db): State<Database>) -> Result<Json<Vec<Team>>, WebError> {
    let teams = services::list_ranked_teams(&db).await?;

    Ok(Json(teams))
}

#[utoipa::path(
    get,
    path = "/api/teams/{team_id}",
    params(
        ("team_id" = String, Path, description = "Team id")
    ),
    responses(
        (status = 200, description = "Team found", body = Team),
        (status = 404, description = "Team not found")
    ),
    tag = "games"
)]
pub async fn get_team(
    State(db): State<Database>,
    Path(team_id): Path<String>,
) -> Result<Response, WebError> {
    let team = services::get_team(&db, &team_id).await?;

    Ok(Json(team).into_response())
}

#[utoipa::path(
    put,
    path = "/api/teams",
    request_body = UpsertTeamRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Team stored", body = Team),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "feed"
)]
pub async fn upsert_team(
    State(db): State<Database>,
    Json(req): Json<UpsertTeamRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let team = services::upsert_team(&db, &req).await?;

    Ok(Json(team).into_response())
}

#[utoipa::path(
    put,
    path = "/api/games",
    request_body = UpsertGameRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Game stored", body = Game),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Unknown team or frozen matchup")
    ),
    tag = "feed"
)]
pub async fn upsert_game(
    State(db): State<Database>,
    Json(req): Json<UpsertGameRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let game = services::upsert_game(&db, &req).await?;

    Ok(Json(game).into_response())
}

#[utoipa::path(
    post,
    path = "/api/games/{game_id}/result",
    params(
        ("game_id" = String, Path, description = "Game id")
    ),
    request_body = RecordResultRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Result recorded and picks scored", body = RecordResultResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Game not found"),
        (status = 409, description = "A different winner is already recorded"),
        (status = 422, description = "Winner did not play in the game")
    ),
    tag = "feed"
)]
pub async fn record_result(
    State(db): State<Database>,
    Path(game_id): Path<String>,
    Json(req): Json<RecordResultRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let outcome = services::record_result(&db, &game_id, &req).await?;

    Ok(Json(outcome).into_response())
}

#[utoipa::path(
    post,
    path = "/api/games/{game_id}/cancel",
    params(
        ("game_id" = String, Path, description = "Game id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Game cancelled", body = Game),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Game not found"),
        (status = 422, description = "Game is already final")
    ),
    tag = "feed"
)]
pub async fn cancel_game(
    State(db): State<Database>,
    Path(game_id): Path<String>,
) -> Result<Response, WebError> {
    let game = services::cancel_game(&db, &game_id).await?;

    Ok(Json(game).into_response())
}

#[utoipa::path(
    post,
    path = "/api/games/{game_id}/rescore",
    params(
        ("game_id" = String, Path, description = "Game id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Score entries rebuilt", body = Vec<ScoreEntry>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Game not found")
    ),
    tag = "feed"
)]
pub async fn rescore_game(
    State(db): State<Database>,
    Path(game_id): Path<String>,
) -> Result<Response, WebError> {
    let entries = services::rescore_game(&db, &game_id).await?;

    Ok(Json(entries).into_response())
}
