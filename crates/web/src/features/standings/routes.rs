use axum::{Router, routing::get};
use pickem::Database;

use super::handlers::{
    get_score_for_pick, get_standings, list_scores_for_game, list_scores_for_user,
};

pub fn routes() -> Router<Database> {
    Router::new().route("/", get(get_standings))
}

pub fn score_routes() -> Router<Database> {
    Router::new()
        .route("/picks/:pick_id", get(get_score_for_pick))
        .route("/games/:game_id", get(list_scores_for_game))
        .route("/users/:user_id", get(list_scores_for_user))
}
