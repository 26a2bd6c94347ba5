//! Redis Store Module
//!
//! Key-value store backed by a Redis server.

use std::fmt;

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands};
use tracing::{debug, error, info};

use crate::error::Result;
use crate::store::KvStore;

/// Redis-backed store.
///
/// Uses a `ConnectionManager`, which is cheap to clone and reconnects on
/// its own; every command runs on a clone of it.
#[derive(Clone)]
pub struct RedisStore {
    conn_manager: ConnectionManager,
    redis_url: String,
}

impl fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisStore")
            .field("redis_url", &self.redis_url)
            .finish_non_exhaustive()
    }
}

impl RedisStore {
    /// Connects to the Redis server at `redis_url`.
    pub async fn connect(redis_url: &str) -> Result<Self> {
        info!("Connecting to Redis at {}", redis_url);
        let client = redis::Client::open(redis_url)?;
        let conn_manager = ConnectionManager::new(client).await.map_err(|e| {
            error!("Failed to create Redis ConnectionManager: {}", e);
            e
        })?;
        info!("Redis connection ready");

        Ok(Self {
            conn_manager,
            redis_url: redis_url.to_string(),
        })
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.conn_manager.clone();
        let value: Option<Vec<u8>> = conn.get(key).await?;
        debug!(key = key, hit = value.is_some(), "Redis GET");
        Ok(value)
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        let mut conn = self.conn_manager.clone();
        conn.set::<_, _, ()>(key, value.as_slice()).await?;
        debug!(key = key, bytes = value.len(), "Redis SET");
        Ok(())
    }

    async fn incr(&self, key: &str) -> Result<i64> {
        let mut conn = self.conn_manager.clone();
        let count: i64 = conn.incr(key, 1).await?;
        debug!(key = key, count = count, "Redis INCR");
        Ok(count)
    }

    async fn rpush(&self, key: &str, value: Vec<u8>) -> Result<usize> {
        let mut conn = self.conn_manager.clone();
        let len: usize = conn.rpush(key, value.as_slice()).await?;
        debug!(key = key, len = len, "Redis RPUSH");
        Ok(len)
    }

    async fn read_list(&self, key: &str) -> Result<Vec<Vec<u8>>> {
        let mut conn = self.conn_manager.clone();
        let items: Vec<Vec<u8>> = conn.lrange(key, 0, -1).await?;
        Ok(items)
    }

    async fn flush(&self) -> Result<()> {
        let mut conn = self.conn_manager.clone();
        redis::cmd("FLUSHDB").query_async::<_, ()>(&mut conn).await?;
        info!("Redis database flushed");
        Ok(())
    }
}
