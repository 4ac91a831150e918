use axum::{http::HeaderValue, http::Method, routing::get, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::shared::{AppError, AppState};
use crate::websockets::websocket_handler;

/// Static confirmation returned by the liveness route
pub const HEALTH_MESSAGE: &str = "Card room server is running!";

/// GET / - liveness check, carries no state
pub async fn health() -> &'static str {
    HEALTH_MESSAGE
}

/// CORS policy built from the configured origins; no origins means any origin
pub fn cors_layer(config: &ServerConfig) -> Result<CorsLayer, AppError> {
    let layer = CorsLayer::new().allow_methods([Method::GET, Method::POST]);

    if config.allowed_origins.is_empty() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| AppError::InvalidOrigin(origin.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

pub fn build_router(app_state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/ws", get(websocket_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
