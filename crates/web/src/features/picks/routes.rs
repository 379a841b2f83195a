use axum::{Router, routing::get};
use pickem::Database;

use super::handlers::{get_pick, list_my_picks, list_picks_for_game, submit_pick, update_pick};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_my_picks).post(submit_pick))
        .route("/:pick_id", get(get_pick).put(update_pick))
        .route("/games/:game_id", get(list_picks_for_game))
}
