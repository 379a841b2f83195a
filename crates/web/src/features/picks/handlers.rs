use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pickem::{
    Database,
    dto::pick::{SubmitPickRequest, UpdatePickRequest, WeekQuery},
    models::Pick,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::AuthUser;

use super::services;

#[utoipa::path(
    post,
    path = "/api/picks",
    request_body = SubmitPickRequest,
    params(
        ("x-user-id" = String, Header, description = "User id supplied by the auth service")
    ),
    responses(
        (status = 201, description = "Pick stored", body = Pick),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing user id"),
        (status = 404, description = "Game not found"),
        (status = 409, description = "Kickoff passed or confidence already used"),
        (status = 422, description = "Team not in game or confidence out of range")
    ),
    tag = "picks"
)]
pub async fn submit_pick(
    State(db): State<Database>,
    AuthUser(user_id): AuthUser,
    Json(req): Json<SubmitPickRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let pick = services::submit_pick(&db, &user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(pick)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/picks/{pick_id}",
    request_body = UpdatePickRequest,
    params(
        ("pick_id" = Uuid, Path, description = "Pick id"),
        ("x-user-id" = String, Header, description = "User id supplied by the auth service")
    ),
    responses(
        (status = 200, description = "Pick overwritten", body = Pick),
        (status = 401, description = "Missing user id"),
        (status = 404, description = "Pick not found"),
        (status = 409, description = "Kickoff passed, stale version or confidence already used")
    ),
    tag = "picks"
)]
pub async fn update_pick(
    State(db): State<Database>,
    AuthUser(user_id): AuthUser,
    Path(pick_id): Path<Uuid>,
    Json(req): Json<UpdatePickRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let pick = services::update_pick(&db, pick_id, &user_id, &req).await?;

    Ok(Json(pick).into_response())
}

#[utoipa::path(
    get,
    path = "/api/picks/{pick_id}",
    params(
        ("pick_id" = Uuid, Path, description = "Pick id")
    ),
    responses(
        (status = 200, description = "Pick found", body = Pick),
        (status = 404, description = "Pick not found")
    ),
    tag = "picks"
)]
pub async fn get_pick(
    State(db): State<Database>,
    Path(pick_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let pick = services::get_pick(&db, pick_id).await?;

    Ok(Json(pick).into_response())
}

#[utoipa::path(
    get,
    path = "/api/picks",
    params(
        WeekQuery,
        ("x-user-id" = String, Header, description = "User id supplied by the auth service")
    ),
    responses(
        (status = 200, description = "The user's picks for the week", body = Vec<Pick>),
        (status = 401, description = "Missing user id")
    ),
    tag = "picks"
)]
pub async fn list_my_picks(
    State(db): State<Database>,
    AuthUser(user_id): AuthUser,
    Query(query): Query<WeekQuery>,
) -> Result<Json<Vec<Pick>>, WebError> {
    let picks = services::list_picks_for_user(&db, &user_id, query.week).await?;

    Ok(Json(picks))
}

#[utoipa::path(
    get,
    path = "/api/picks/games/{game_id}",
    params(
        ("game_id" = String, Path, description = "Game id")
    ),
    responses(
        (status = 200, description = "All picks on the game", body = Vec<Pick>),
        (status = 404, description = "Game not found")
    ),
    tag = "picks"
)]
pub async fn list_picks_for_game(
    State(db): State<Database>,
    Path(game_id): Path<String>,
) -> Result<Json<Vec<Pick>>, WebError> {
    let picks = services::list_picks_for_game(&db, &game_id).await?;

    Ok(Json(picks))
}
