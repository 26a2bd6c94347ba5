//! In-Memory Store Module
//!
//! HashMap-backed stand-in for Redis, used by tests and local runs.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{Error, Result};
use crate::store::KvStore;

// == Slot ==
/// What a single key holds.
#[derive(Debug, Clone)]
enum Slot {
    /// Plain string value (also used for counters)
    Bytes(Vec<u8>),
    /// List value built by `rpush`
    List(Vec<Vec<u8>>),
}

// == Memory Store ==
/// In-process key-value store with the Redis semantics the cache relies on.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Key-value storage
    slots: RwLock<HashMap<String, Slot>>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Length ==
    /// Returns the number of keys currently held.
    pub async fn len(&self) -> usize {
        self.slots.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no keys.
    pub async fn is_empty(&self) -> bool {
        self.slots.read().await.is_empty()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match self.slots.read().await.get(key) {
            Some(Slot::Bytes(bytes)) => Ok(Some(bytes.clone())),
            Some(Slot::List(_)) => Err(Error::WrongType(key.to_string())),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.slots
            .write()
            .await
            .insert(key.to_string(), Slot::Bytes(value));
        debug!(key = key, "memory store set");
        Ok(())
    }

    async fn incr(&self, key: &str) -> Result<i64> {
        let mut slots = self.slots.write().await;

        let current = match slots.get(key) {
            Some(Slot::Bytes(bytes)) => std::str::from_utf8(bytes)
                .ok()
                .and_then(|text| text.parse::<i64>().ok())
                .ok_or_else(|| {
                    Error::Conversion(format!("value at {} is not an integer", key))
                })?,
            Some(Slot::List(_)) => return Err(Error::WrongType(key.to_string())),
            None => 0,
        };

        let next = current
            .checked_add(1)
            .ok_or_else(|| Error::Conversion(format!("increment overflows at {}", key)))?;
        slots.insert(key.to_string(), Slot::Bytes(next.to_string().into_bytes()));
        Ok(next)
    }

    async fn rpush(&self, key: &str, value: Vec<u8>) -> Result<usize> {
        let mut slots = self.slots.write().await;

        match slots
            .entry(key.to_string())
            .or_insert_with(|| Slot::List(Vec::new()))
        {
            Slot::List(items) => {
                items.push(value);
                Ok(items.len())
            }
            Slot::Bytes(_) => Err(Error::WrongType(key.to_string())),
        }
    }

    async fn read_list(&self, key: &str) -> Result<Vec<Vec<u8>>> {
        match self.slots.read().await.get(key) {
            Some(Slot::List(items)) => Ok(items.clone()),
            Some(Slot::Bytes(_)) => Err(Error::WrongType(key.to_string())),
            None => Ok(Vec::new()),
        }
    }

    async fn flush(&self) -> Result<()> {
        let mut slots = self.slots.write().await;
        let removed = slots.len();
        slots.clear();
        debug!(removed = removed, "memory store flushed");
        Ok(())
    }
}
