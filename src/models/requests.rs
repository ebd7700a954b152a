//! Request DTOs for the gateway API
//!
//! Defines the structure of incoming HTTP request bodies.

use std::fmt;

use serde::Deserialize;

use crate::store::DatabaseIndex;

/// Request body for POST /set/ and PUT /update/
#[derive(Clone, Deserialize)]
pub struct KeyValueRequest {
    pub key: String,
    pub value: String,
    /// Target database index
    pub db: DatabaseIndex,
    /// Shared secret
    pub password: String,
}

/// Request body for GET /get/ and DELETE /delete/
#[derive(Clone, Deserialize)]
pub struct KeyRequest {
    pub key: String,
    /// Target database index
    pub db: DatabaseIndex,
    /// Shared secret
    pub password: String,
}

impl fmt::Debug for KeyValueRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyValueRequest")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("db", &self.db)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for KeyRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyRequest")
            .field("key", &self.key)
            .field("db", &self.db)
            .field("password", &"<redacted>")
            .finish()
    }
}
