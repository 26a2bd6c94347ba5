//! Cache Facade Module
//!
//! Stores typed values under random keys and reads them back, counting and
//! recording every store call.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};
use uuid::Uuid;

use crate::cache::convert::get_int;
use crate::cache::instrument::{Counted, Method, MethodExt, Recorded};
use crate::cache::replay;
use crate::error::Result;
use crate::models::{CallRecord, Value};
use crate::store::KvStore;

/// Qualified name of [`Cache::store`], used for its counter and history keys.
pub const STORE_METHOD: &str = "Cache.store";

// == Store Value ==
/// The bare store operation: writes a value under a fresh UUID key.
pub struct StoreValue<S> {
    store: Arc<S>,
}

impl<S: KvStore> StoreValue<S> {
    /// Creates the operation over `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: KvStore> Method for StoreValue<S> {
    type Input = Value;
    type Output = String;

    fn qualified_name(&self) -> &str {
        STORE_METHOD
    }

    async fn call(&self, data: Value) -> Result<String> {
        let key = Uuid::new_v4().to_string();
        self.store.set(&key, data.to_bytes()).await?;
        debug!(key = %key, "value stored");
        Ok(key)
    }
}

// == Cache ==
/// Cache facade over a [`KvStore`].
///
/// `store` is wrapped as `Counted(Recorded(StoreValue))`: every call bumps
/// the `Cache.store` counter and appends to the `Cache.store:inputs` and
/// `Cache.store:outputs` lists.
pub struct Cache<S: KvStore> {
    /// Backing store, shared with the instrumentation wrappers
    kv: Arc<S>,
    /// Instrumented store operation
    store_method: Counted<S, Recorded<S, StoreValue<S>>>,
}

impl<S: KvStore> Cache<S> {
    // == Constructor ==
    /// Creates a cache over `store` and flushes the store's database.
    ///
    /// The flush wipes every counter and history list, and any other data
    /// sharing that database.
    pub async fn new(store: S) -> Result<Self> {
        Self::from_shared(Arc::new(store)).await
    }

    /// Same as [`Cache::new`], for a store the caller keeps a handle to.
    pub async fn from_shared(kv: Arc<S>) -> Result<Self> {
        kv.flush().await?;
        info!("Cache initialized, database flushed");

        let store_method = StoreValue::new(kv.clone())
            .recorded(kv.clone())
            .counted(kv.clone());

        Ok(Self { kv, store_method })
    }

    // == Store ==
    /// Stores `data` under a new random key and returns the key.
    pub async fn store(&self, data: impl Into<Value>) -> Result<String> {
        let data = data.into();
        self.store_method.call(data).await
    }

    // == Get ==
    /// Reads the raw bytes stored under `key`.
    ///
    /// A missing key yields `Ok(None)`.
    pub async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.kv.get(key).await
    }

    // == Get With ==
    /// Reads `key` and runs `convert` over the raw bytes when present.
    ///
    /// # Example
    /// ```ignore
    /// let key = cache.store(42).await?;
    /// let n = cache.get_with(&key, get_int).await?;
    /// assert_eq!(n, Some(42));
    /// ```
    pub async fn get_with<T, F>(&self, key: &str, convert: F) -> Result<Option<T>>
    where
        F: FnOnce(&[u8]) -> Result<T>,
    {
        match self.kv.get(key).await? {
            Some(data) => convert(&data).map(Some),
            None => Ok(None),
        }
    }

    // == Call Count ==
    /// Returns how many times [`Cache::store`] has been called.
    pub async fn call_count(&self) -> Result<i64> {
        Ok(self.get_with(STORE_METHOD, get_int).await?.unwrap_or(0))
    }

    // == History ==
    /// Returns the recorded calls of [`Cache::store`], oldest first.
    pub async fn history(&self) -> Result<Vec<CallRecord>> {
        replay::history(self.kv.as_ref(), STORE_METHOD).await
    }

    // == Replay ==
    /// Prints the call history of [`Cache::store`] to stdout.
    pub async fn replay(&self) -> Result<()> {
        replay::replay(self.kv.as_ref(), STORE_METHOD).await
    }

    /// Returns the backing store.
    pub fn backend(&self) -> &S {
        &self.kv
    }
}
