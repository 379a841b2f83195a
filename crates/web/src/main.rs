use anyhow::Context;
use pickem::{Database, PickemConfig};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::games::handlers::get_game,
        features::games::handlers::list_games_for_week,
        features::games::handlers::get_team,
        features::games::handlers::list_ranked_teams,
        features::games::handlers::upsert_team,
        features::games::handlers::upsert_game,
        features::games::handlers::record_result,
        features::games::handlers::cancel_game,
        features::games::handlers::rescore_game,
        features::picks::handlers::submit_pick,
        features::picks::handlers::update_pick,
        features::picks::handlers::get_pick,
        features::picks::handlers::list_my_picks,
        features::picks::handlers::list_picks_for_game,
        features::standings::handlers::get_standings,
        features::standings::handlers::get_score_for_pick,
        features::standings::handlers::list_scores_for_game,
        features::standings::handlers::list_scores_for_user,
    ),
    components(
        schemas(
            pickem::dto::team::UpsertTeamRequest,
            pickem::dto::game::UpsertGameRequest,
            pickem::dto::game::RecordResultRequest,
            pickem::dto::game::RecordResultResponse,
            pickem::dto::pick::SubmitPickRequest,
            pickem::dto::pick::UpdatePickRequest,
            pickem::dto::common::PaginationMeta,
            pickem::models::Team,
            pickem::models::Game,
            pickem::models::GameStatus,
            pickem::models::FinalScore,
            pickem::models::Pick,
            pickem::models::TotalPick,
            pickem::models::ScoreEntry,
            pickem::models::StandingsRow,
            pickem::models::ScoringPolicy,
        )
    ),
    tags(
        (name = "games", description = "Public schedule endpoints"),
        (name = "picks", description = "Pick submission endpoints"),
        (name = "standings", description = "Public scoring and leaderboard endpoints"),
        (name = "feed", description = "Schedule and result feed endpoints"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting pick'em API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!(
        scoring_policy = %config.scoring_policy,
        "Configuration loaded successfully"
    );

    let db = Database::new(PickemConfig::new(config.scoring_policy));

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    if api_keys.is_empty() {
        tracing::warn!("API_KEYS is empty, feed endpoints will reject every request");
    }

    let app = features::router(db, api_keys)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive());

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}
