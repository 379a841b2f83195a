use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use pickem::{
    Database,
    dto::{
        common::PaginatedResponse,
        standings::{ScoreQuery, StandingsFilter},
    },
    models::{ScoreEntry, StandingsRow},
};
use uuid::Uuid;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/standings",
    params(StandingsFilter),
    responses(
        (status = 200, description = "Standings retrieved successfully", body = PaginatedResponse<StandingsRow>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "standings"
)]
pub async fn get_standings(
    State(db): State<Database>,
    Query(filter): Query<StandingsFilter>,
) -> Result<Response, WebError> {
    filter.validate().map_err(WebError::BadRequest)?;

    let (rows, total_items) = services::get_standings(&db, &filter).await?;

    let response = PaginatedResponse::new(rows, filter.pagination(), total_items);

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/scores/picks/{pick_id}",
    params(
        ("pick_id" = Uuid, Path, description = "Pick id")
    ),
    responses(
        (status = 200, description = "Score entry of the pick", body = ScoreEntry),
        (status = 404, description = "Pick not scored")
    ),
    tag = "standings"
)]
pub async fn get_score_for_pick(
    State(db): State<Database>,
    Path(pick_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let entry = services::get_score_for_pick(&db, pick_id).await?;

    Ok(Json(entry).into_response())
}

#[utoipa::path(
    get,
    path = "/api/scores/games/{game_id}",
    params(
        ("game_id" = String, Path, description = "Game id")
    ),
    responses(
        (status = 200, description = "Score entries of the game, empty until final", body = Vec<ScoreEntry>),
        (status = 404, description = "Game not found")
    ),
    tag = "standings"
)]
pub async fn list_scores_for_game(
    State(db): State<Database>,
    Path(game_id): Path<String>,
) -> Result<Json<Vec<ScoreEntry>>, WebError> {
    let entries = services::list_scores_for_game(&db, &game_id).await?;

    Ok(Json(entries))
}

#[utoipa::path(
    get,
    path = "/api/scores/users/{user_id}",
    params(
        ("user_id" = String, Path, description = "User id"),
        ScoreQuery
    ),
    responses(
        (status = 200, description = "Score entries of the user", body = Vec<ScoreEntry>)
    ),
    tag = "standings"
)]
pub async fn list_scores_for_user(
    State(db): State<Database>,
    Path(user_id): Path<String>,
    Query(query): Query<ScoreQuery>,
) -> Result<Json<Vec<ScoreEntry>>, WebError> {
    let entries = services::list_scores_for_user(&db, &user_id, query.week).await?;

    Ok(Json(entries))
}
