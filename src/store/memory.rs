//! In-Memory Backend
//!
//! Process-local stand-in for a Redis server. Databases are isolated maps
//! shared by every connection; each call is counted so tests can assert
//! whether the store was touched at all.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DatabaseIndex, KvBackend, KvConnection, StoreError, StoreResult};

/// Number of databases a default Redis server exposes.
pub const DEFAULT_DATABASES: DatabaseIndex = 16;

type Databases = HashMap<DatabaseIndex, HashMap<String, Vec<u8>>>;

// == Memory Backend ==
#[derive(Debug, Clone)]
pub struct MemoryBackend {
    data: Arc<RwLock<Databases>>,
    calls: Arc<AtomicUsize>,
    databases: DatabaseIndex,
}

impl MemoryBackend {
    /// Creates an empty backend with [`DEFAULT_DATABASES`] databases.
    pub fn new() -> Self {
        Self::with_databases(DEFAULT_DATABASES)
    }

    /// Creates an empty backend exposing indices `0..databases`.
    pub fn with_databases(databases: DatabaseIndex) -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
            calls: Arc::new(AtomicUsize::new(0)),
            databases,
        }
    }

    /// Total connects and primitives issued against this backend.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Writes raw bytes directly, bypassing the call counter.
    pub async fn insert_raw(&self, db: DatabaseIndex, key: impl Into<String>, value: Vec<u8>) {
        self.data
            .write()
            .await
            .entry(db)
            .or_default()
            .insert(key.into(), value);
    }

    /// Reads raw bytes directly, bypassing the call counter.
    pub async fn peek(&self, db: DatabaseIndex, key: &str) -> Option<Vec<u8>> {
        self.data
            .read()
            .await
            .get(&db)
            .and_then(|entries| entries.get(key).cloned())
    }

    /// Number of keys held in `db`.
    pub async fn len(&self, db: DatabaseIndex) -> usize {
        self.data.read().await.get(&db).map_or(0, HashMap::len)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KvBackend for MemoryBackend {
    async fn connect(&self, db: DatabaseIndex) -> StoreResult<Box<dyn KvConnection>> {
        self.record_call();
        if db >= self.databases {
            return Err(StoreError::new("ERR DB index is out of range"));
        }
        Ok(Box::new(MemoryConnection {
            backend: self.clone(),
            db,
        }))
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

// == Memory Connection ==
struct MemoryConnection {
    backend: MemoryBackend,
    db: DatabaseIndex,
}

#[async_trait]
impl KvConnection for MemoryConnection {
    async fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.backend.record_call();
        self.backend
            .insert_raw(self.db, key, value.as_bytes().to_vec())
            .await;
        Ok(())
    }

    async fn get(&mut self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        self.backend.record_call();
        Ok(self.backend.peek(self.db, key).await)
    }

    async fn exists(&mut self, key: &str) -> StoreResult<bool> {
        self.backend.record_call();
        let data = self.backend.data.read().await;
        Ok(data
            .get(&self.db)
            .is_some_and(|entries| entries.contains_key(key)))
    }

    async fn delete(&mut self, key: &str) -> StoreResult<()> {
        self.backend.record_call();
        let mut data = self.backend.data.write().await;
        if let Some(entries) = data.get_mut(&self.db) {
            entries.remove(key);
        }
        Ok(())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let backend = MemoryBackend::new();
        let mut conn = backend.connect(0).await.unwrap();

        conn.set("key1", "value1").await.unwrap();

        assert_eq!(conn.get("key1").await.unwrap(), Some(b"value1".to_vec()));
        assert!(conn.exists("key1").await.unwrap());
    }

    #[tokio::test]
    async fn test_get_missing() {
        let backend = MemoryBackend::new();
        let mut conn = backend.connect(0).await.unwrap();

        assert_eq!(conn.get("missing").await.unwrap(), None);
        assert!(!conn.exists("missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_databases_are_isolated() {
        let backend = MemoryBackend::new();
        let mut db0 = backend.connect(0).await.unwrap();
        let mut db1 = backend.connect(1).await.unwrap();

        db0.set("shared", "zero").await.unwrap();

        assert!(!db1.exists("shared").await.unwrap());
        assert_eq!(backend.len(0).await, 1);
        assert_eq!(backend.len(1).await, 0);
    }

    #[tokio::test]
    async fn test_delete() {
        let backend = MemoryBackend::new();
        let mut conn = backend.connect(2).await.unwrap();

        conn.set("key1", "value1").await.unwrap();
        conn.delete("key1").await.unwrap();

        assert_eq!(conn.get("key1").await.unwrap(), None);
        // Deleting an absent key is not an error at this layer
        conn.delete("key1").await.unwrap();
    }

    #[tokio::test]
    async fn test_connections_share_state() {
        let backend = MemoryBackend::new();

        backend.connect(0).await.unwrap().set("k", "v").await.unwrap();
        let mut other = backend.connect(0).await.unwrap();

        assert_eq!(other.get("k").await.unwrap(), Some(b"v".to_vec()));
    }

    #[tokio::test]
    async fn test_out_of_range_index() {
        let backend = MemoryBackend::with_databases(4);

        let err = backend.connect(4).await.err().unwrap();
        assert_eq!(err.to_string(), "ERR DB index is out of range");
        assert!(backend.connect(3).await.is_ok());
    }

    #[tokio::test]
    async fn test_calls_are_counted() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.calls(), 0);

        let mut conn = backend.connect(0).await.unwrap();
        conn.set("k", "v").await.unwrap();
        conn.exists("k").await.unwrap();

        assert_eq!(backend.calls(), 3);

        // Direct access does not count
        backend.insert_raw(0, "raw", vec![0xff]).await;
        backend.peek(0, "raw").await;
        assert_eq!(backend.calls(), 3);
    }
}
