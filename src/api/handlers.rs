//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::auth::Authenticator;
use crate::config::{BackendKind, Config};
use crate::error::Result;
use crate::gateway::Gateway;
use crate::models::{GetResponse, HealthResponse, KeyRequest, KeyValueRequest, MessageResponse};
use crate::store::{KvBackend, MemoryBackend, RedisBackend, StoreResult};

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub gateway: Gateway,
}

impl AppState {
    /// Creates a new AppState around an existing gateway.
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails only if the configured Redis URL cannot be parsed.
    pub fn from_config(config: &Config) -> StoreResult<Self> {
        let backend: Arc<dyn KvBackend> = match config.backend {
            BackendKind::Redis => Arc::new(RedisBackend::new(&config.redis_url)?),
            BackendKind::Memory => Arc::new(MemoryBackend::new()),
        };
        let auth = Authenticator::new(config.api_password.clone());

        Ok(Self::new(Gateway::new(auth, backend)))
    }
}

/// Handler for POST /set/
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<KeyValueRequest>,
) -> Result<Json<MessageResponse>> {
    state
        .gateway
        .set(&req.key, &req.value, req.db, &req.password)
        .await?;

    Ok(Json(MessageResponse::set(req.db)))
}

/// Handler for GET /get/
///
/// Takes its parameters from a JSON body like the other endpoints.
pub async fn get_handler(
    State(state): State<AppState>,
    Json(req): Json<KeyRequest>,
) -> Result<Json<GetResponse>> {
    let record = state.gateway.get(&req.key, req.db, &req.password).await?;

    Ok(Json(record.into()))
}

/// Handler for PUT /update/
pub async fn update_handler(
    State(state): State<AppState>,
    Json(req): Json<KeyValueRequest>,
) -> Result<Json<MessageResponse>> {
    state
        .gateway
        .update(&req.key, &req.value, req.db, &req.password)
        .await?;

    Ok(Json(MessageResponse::updated(req.db)))
}

/// Handler for DELETE /delete/
pub async fn delete_handler(
    State(state): State<AppState>,
    Json(req): Json<KeyRequest>,
) -> Result<Json<MessageResponse>> {
    state.gateway.delete(&req.key, req.db, &req.password).await?;

    Ok(Json(MessageResponse::deleted(req.db)))
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.gateway.backend_name()))
}
