pub mod extract;
pub mod request_id;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{conversion::ConversionController, health, voice::VoiceController};
use crate::domain::conversion::ConversionService;
use crate::infrastructure::config::Config;

pub use extract::AppJson;
pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

/// Build the application router with all routes configured
pub fn build_router(
    config: Arc<Config>,
    conversion_service: Arc<ConversionService>,
    conversion_controller: Arc<ConversionController>,
    voice_controller: Arc<VoiceController>,
) -> Router {
    let conversion_routes = Router::new()
        .route("/api/convert", post(ConversionController::convert))
        .with_state(conversion_controller);

    let voice_routes = Router::new()
        .route("/api/voices", get(VoiceController::list_voices))
        .with_state(voice_controller);

    // Browser front ends are served from another origin during development
    let cors = if config.is_development() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(conversion_service)
        .merge(conversion_routes)
        .merge(voice_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_id_middleware))
                .layer(cors),
        )
}

/// Start the HTTP server
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
