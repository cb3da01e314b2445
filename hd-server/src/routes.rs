use crate::app_state::AppState;
use crate::{api, health};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Account endpoints
        .route("/api/login", post(api::users::users::login))
        // Query log endpoints
        .route("/api/save-query", post(api::queries::queries::save_query))
        .route("/api/history/{user_id}", get(api::queries::queries::history))
        .route("/api/public-feed", get(api::queries::queries::public_feed))
        // Generative endpoints
        .route("/api/analyze", post(api::analysis::analysis::analyze))
        .route("/api/speak", post(api::analysis::analysis::speak))
        // Health check
        .route("/health", get(health::health_check))
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins, single-page client)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
