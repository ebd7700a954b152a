//! Gateway Module
//!
//! The four key-value operations. Each one authenticates, opens a connection
//! scoped to the requested database, issues its store primitive(s) and maps
//! the outcome onto [`GatewayError`].
//!
//! Update and delete check existence and then act in two round-trips. Another
//! caller can change the key in between; the gateway does not guard against
//! that and last write wins.


use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::auth::Authenticator;
use crate::error::{GatewayError, Result};
use crate::store::{DatabaseIndex, KvBackend, KvConnection, StoreError};

// == Record ==
/// A value read back from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: String,
    pub value: String,
    pub db: DatabaseIndex,
}

// == Gateway ==
/// Authenticated front for a [`KvBackend`].
#[derive(Clone)]
pub struct Gateway {
    auth: Authenticator,
    backend: Arc<dyn KvBackend>,
}

impl Gateway {
    pub fn new(auth: Authenticator, backend: Arc<dyn KvBackend>) -> Self {
        Self { auth, backend }
    }

    /// Name of the backing store.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Authenticates, then connects to `db`.
    async fn open(&self, db: DatabaseIndex, credential: &str) -> Result<Box<dyn KvConnection>> {
        self.auth.validate(credential)?;
        Ok(self.backend.connect(db).await?)
    }

    // == Set ==
    /// Writes `value` at `key`, creating or overwriting it.
    pub async fn set(
        &self,
        key: &str,
        value: &str,
        db: DatabaseIndex,
        credential: &str,
    ) -> Result<()> {
        let mut conn = self.open(db, credential).await?;
        conn.set(key, value).await?;

        debug!("Set key '{}' in db {}", key, db);
        Ok(())
    }

    // == Get ==
    /// Reads `key`, decoding the stored bytes as UTF-8.
    pub async fn get(&self, key: &str, db: DatabaseIndex, credential: &str) -> Result<Record> {
        let mut conn = self.open(db, credential).await?;
        let bytes = conn
            .get(key)
            .await?
            .ok_or_else(|| GatewayError::NotFound(key.to_string()))?;

        let value = String::from_utf8(bytes).map_err(|e| StoreError::new(e.to_string()))?;

        debug!("Read key '{}' from db {}", key, db);
        Ok(Record {
            key: key.to_string(),
            value,
            db,
        })
    }

    // == Update ==
    /// Overwrites `key` only if it already exists.
    pub async fn update(
        &self,
        key: &str,
        value: &str,
        db: DatabaseIndex,
        credential: &str,
    ) -> Result<()> {
        let mut conn = self.open(db, credential).await?;
        if !conn.exists(key).await? {
            return Err(GatewayError::NotFound(key.to_string()));
        }
        conn.set(key, value).await?;

        debug!("Updated key '{}' in db {}", key, db);
        Ok(())
    }

    // == Delete ==
    /// Removes `key`, failing if it does not exist.
    pub async fn delete(&self, key: &str, db: DatabaseIndex, credential: &str) -> Result<()> {
        let mut conn = self.open(db, credential).await?;
        if !conn.exists(key).await? {
            return Err(GatewayError::NotFound(key.to_string()));
        }
        conn.delete(key).await?;

        debug!("Deleted key '{}' from db {}", key, db);
        Ok(())
    }
}

impl fmt::Debug for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateway")
            .field("auth", &self.auth)
            .field("backend", &self.backend.name())
            .finish()
    }
}
