//! Response DTOs for the gateway API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::gateway::Record;
use crate::store::DatabaseIndex;

/// Response body for GET /get/
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The stored value
    pub value: String,
    /// Database the value was read from
    pub db: DatabaseIndex,
}

impl From<Record> for GetResponse {
    fn from(record: Record) -> Self {
        Self {
            key: record.key,
            value: record.value,
            db: record.db,
        }
    }
}

/// Response body for the set, update and delete operations
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    /// Success message naming the database
    pub message: String,
}

impl MessageResponse {
    pub fn set(db: DatabaseIndex) -> Self {
        Self {
            message: format!("Key-Value pair set successfully in database {}", db),
        }
    }

    pub fn updated(db: DatabaseIndex) -> Self {
        Self {
            message: format!("Key-Value pair updated successfully in database {}", db),
        }
    }

    pub fn deleted(db: DatabaseIndex) -> Self {
        Self {
            message: format!("Key deleted successfully from database {}", db),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    /// Name of the store backend in use
    pub backend: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(backend: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            backend: backend.into(),
        }
    }
}
