pub mod health;
pub mod zoom;

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.frontend_url);

    Router::new()
        .route("/", get(health::health))
        .route("/api/zoom/status", get(zoom::get_status))
        .route("/api/zoom/create-meeting", post(zoom::create_meeting))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Only the configured frontend origin gets CORS headers.
pub fn cors_layer(frontend_url: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    match HeaderValue::from_str(frontend_url) {
        Ok(origin) => layer.allow_origin(AllowOrigin::exact(origin)),
        Err(_) => {
            tracing::warn!(frontend_url, "FRONTEND_URL is not a valid origin, cross-origin requests disabled");
            layer
        }
    }
}
