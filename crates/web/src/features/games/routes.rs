use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use pickem::Database;

use super::handlers::{
    cancel_game, get_game, get_team, list_games_for_week, list_ranked_teams, record_result,
    rescore_game, upsert_game, upsert_team,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", put(upsert_game))
        .route("/:game_id/result", post(record_result))
        .route("/:game_id/cancel", post(cancel_game))
        .route("/:game_id/rescore", post(rescore_game))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/:game_id", get(get_game))
        .merge(protected)
}

pub fn week_routes() -> Router<Database> {
    Router::new().route("/:week/games", get(list_games_for_week))
}

pub fn team_routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", put(upsert_team))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/ranked", get(list_ranked_teams))
        .route("/:team_id", get(get_team))
        .merge(protected)
}
