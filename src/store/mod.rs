//! Store Module
//!
//! Minimal client capability set the gateway consumes from the key-value store:
//! open a connection scoped to a database index, then get/set/exists/delete.

mod memory;
mod redis_store;

pub use memory::{MemoryBackend, DEFAULT_DATABASES};
pub use redis_store::{describe_endpoint, RedisBackend, DEFAULT_REDIS_URL};

use async_trait::async_trait;
use thiserror::Error;

/// Index of one of the store's isolated namespaces.
pub type DatabaseIndex = u32;

// == Store Error ==
/// Any failure talking to or decoding data from the store.
///
/// The message is the store client's own, unmodified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct StoreError(pub String);

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<redis::RedisError> for StoreError {
    fn from(err: redis::RedisError) -> Self {
        Self(err.to_string())
    }
}

/// Convenience Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

// == Backend ==
/// Factory for connections to the store.
#[async_trait]
pub trait KvBackend: Send + Sync {
    /// Opens a fresh connection targeting `db`.
    async fn connect(&self, db: DatabaseIndex) -> StoreResult<Box<dyn KvConnection>>;

    /// Short backend name, reported by the health endpoint.
    fn name(&self) -> &'static str;
}

// == Connection ==
/// A connection bound to a single database index.
///
/// Dropped at the end of the request that opened it.
#[async_trait]
pub trait KvConnection: Send {
    /// Writes `value` at `key`, overwriting any previous value.
    async fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Reads the raw bytes at `key`, `None` when absent.
    async fn get(&mut self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    async fn exists(&mut self, key: &str) -> StoreResult<bool>;

    async fn delete(&mut self, key: &str) -> StoreResult<()>;
}
