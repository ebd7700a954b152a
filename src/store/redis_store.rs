//! Redis Backend
//!
//! Opens a new multiplexed tokio connection per request, with the requested
//! database index applied to the connection info before connecting.

use std::fmt;

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client, ConnectionAddr, ConnectionInfo, IntoConnectionInfo};
use tracing::debug;

use super::{DatabaseIndex, KvBackend, KvConnection, StoreResult};

/// Store endpoint used when no URL is configured.
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";

/// Describes the endpoint of `url` without user info, for logging.
pub fn describe_endpoint(url: &str) -> String {
    match url.into_connection_info() {
        Ok(info) => format_addr(&info.addr),
        Err(_) => "<invalid redis url>".to_string(),
    }
}

fn format_addr(addr: &ConnectionAddr) -> String {
    match addr {
        ConnectionAddr::Tcp(host, port) => format!("{}:{}", host, port),
        ConnectionAddr::TcpTls { host, port, .. } => format!("{}:{} (tls)", host, port),
        // Socket paths carry no credentials
        other => format!("{:?}", other),
    }
}

// == Redis Backend ==
/// Connection factory for a Redis server.
#[derive(Clone)]
pub struct RedisBackend {
    /// Parsed endpoint; only `redis.db` varies per connection
    base: ConnectionInfo,
}

impl RedisBackend {
    /// Parses `url` once so that a malformed endpoint fails at start-up.
    pub fn new(url: &str) -> StoreResult<Self> {
        Ok(Self {
            base: url.into_connection_info()?,
        })
    }

    /// Connection info targeting `db` on the configured endpoint.
    pub fn connection_info(&self, db: DatabaseIndex) -> ConnectionInfo {
        let mut info = self.base.clone();
        info.redis.db = i64::from(db);
        info
    }

    /// Host and port (or socket path) of the server, without credentials.
    pub fn endpoint(&self) -> String {
        format_addr(&self.base.addr)
    }
}

impl fmt::Debug for RedisBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisBackend")
            .field("endpoint", &self.endpoint())
            .field("db", &self.base.redis.db)
            .finish()
    }
}

#[async_trait]
impl KvBackend for RedisBackend {
    async fn connect(&self, db: DatabaseIndex) -> StoreResult<Box<dyn KvConnection>> {
        debug!("Opening redis connection to {} (db {})", self.endpoint(), db);
        let client = Client::open(self.connection_info(db))?;
        let conn = client.get_multiplexed_async_connection().await?;
        Ok(Box::new(RedisConnection { conn }))
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}

// == Redis Connection ==
struct RedisConnection {
    conn: MultiplexedConnection,
}

#[async_trait]
impl KvConnection for RedisConnection {
    async fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.set::<_, _, ()>(key, value).await?;
        Ok(())
    }

    async fn get(&mut self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        Ok(self.conn.get::<_, Option<Vec<u8>>>(key).await?)
    }

    async fn exists(&mut self, key: &str) -> StoreResult<bool> {
        Ok(self.conn.exists::<_, bool>(key).await?)
    }

    async fn delete(&mut self, key: &str) -> StoreResult<()> {
        self.conn.del::<_, ()>(key).await?;
        Ok(())
    }
}
