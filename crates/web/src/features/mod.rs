pub mod games;
pub mod picks;
pub mod standings;

use axum::Router;
use pickem::Database;

use crate::middleware::auth::ApiKeys;

/// All API routes, bound to the shared store.
pub fn router(db: Database, api_keys: ApiKeys) -> Router {
    Router::new()
        .nest("/api/games", games::routes::routes(api_keys.clone()))
        .nest("/api/weeks", games::routes::week_routes())
        .nest("/api/teams", games::routes::team_routes(api_keys))
        .nest("/api/picks", picks::routes::routes())
        .nest("/api/standings", standings::routes::routes())
        .nest("/api/scores", standings::routes::score_routes())
        .with_state(db)
}
