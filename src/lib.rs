//! NoSQL Toolkit - Redis cache and MongoDB collection helpers
//!
//! Provides a key-value cache with call counting and call history, and
//! helpers to list and insert documents in a collection.

pub mod cache;
pub mod config;
pub mod documents;
pub mod error;
pub mod models;
pub mod store;

pub use cache::Cache;
pub use config::Config;
pub use error::{Error, Result};
pub use models::{CallRecord, Value};
pub use store::{KvStore, MemoryStore, RedisStore};
