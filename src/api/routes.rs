//! API Routes
//!
//! Configures the Axum router with all gateway endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    delete_handler, get_handler, health_handler, set_handler, update_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /set/` - Create or overwrite a key
/// - `GET /get/` - Read a key
/// - `PUT /update/` - Overwrite an existing key
/// - `DELETE /delete/` - Remove an existing key
/// - `GET /health` - Health check endpoint
///
/// The key-value routes are also served without the trailing slash.
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/set/", post(set_handler))
        .route("/set", post(set_handler))
        .route("/get/", get(get_handler))
        .route("/get", get(get_handler))
        .route("/update/", put(update_handler))
        .route("/update", put(update_handler))
        .route("/delete/", delete(delete_handler))
        .route("/delete", delete(delete_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
