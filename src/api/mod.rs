//! API Module
//!
//! HTTP handlers and routing for the gateway REST API.
//!
//! # Endpoints
//! - `POST /set/` - Create or overwrite a key
//! - `GET /get/` - Read a key
//! - `PUT /update/` - Overwrite an existing key
//! - `DELETE /delete/` - Remove an existing key
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
