//! Redis Gateway - A password-gated HTTP front for Redis
//!
//! Exposes set/get/update/delete against a selectable Redis database index.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod store;

pub use api::AppState;
pub use auth::Authenticator;
pub use config::Config;
pub use error::GatewayError;
pub use gateway::Gateway;
