//! Key-Value Store Module
//!
//! The byte-oriented storage the cache, its counters and its call history
//! live in. Backends share one interface so the cache can run against a
//! real Redis server or an in-process fake.

mod memory;
mod redis;

use async_trait::async_trait;

use crate::error::Result;

// Re-export public types
pub use self::memory::MemoryStore;
pub use self::redis::RedisStore;

// == Store Trait ==
/// Minimal Redis-like command set used by the cache.
///
/// Missing keys behave like Redis: `get` yields `None`, counters start at
/// zero and lists start empty.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Reads the raw bytes stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Writes `value` under `key`, replacing whatever was there.
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()>;

    /// Atomically increments the integer under `key` by one.
    ///
    /// Returns the value after the increment.
    async fn incr(&self, key: &str) -> Result<i64>;

    /// Appends `value` to the list under `key`.
    ///
    /// Returns the length of the list after the append.
    async fn rpush(&self, key: &str, value: Vec<u8>) -> Result<usize>;

    /// Reads the whole list under `key`, oldest entry first.
    async fn read_list(&self, key: &str) -> Result<Vec<Vec<u8>>>;

    /// Deletes every key in the current database.
    async fn flush(&self) -> Result<()>;
}
