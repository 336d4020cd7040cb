pub mod handlers;
pub mod types;

use crate::{Result, config::Config, questions};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Builds the application router for the given configuration.
pub fn router(config: &Config) -> Router {
    let app_state = AppState {
        generator: questions::from_config(config),
        index_path: Arc::new(PathBuf::from(&config.server.index_path)),
    };

    router_with_state(app_state)
}

pub fn router_with_state(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/generate_questions", post(handlers::generate_questions))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http().make_span_with(
            |request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            },
        ))
        .layer(CorsLayer::permissive())
}

pub async fn run(config: Config) -> Result<()> {
    let app = router(&config);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {} in {} mode", addr, config.mode);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
