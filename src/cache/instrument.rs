//! Instrumentation Module
//!
//! Call counting and call history as wrapper objects. An operation is a
//! [`Method`]; [`Counted`] and [`Recorded`] are methods too, so they nest
//! around any operation without touching it.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::store::KvStore;

// == Key Names ==
/// Key of the list holding a method's rendered inputs.
pub fn inputs_key(method_name: &str) -> String {
    format!("{}:inputs", method_name)
}

/// Key of the list holding a method's rendered outputs.
pub fn outputs_key(method_name: &str) -> String {
    format!("{}:outputs", method_name)
}

// == Method Trait ==
/// A named operation taking one argument.
///
/// The qualified name identifies the operation in the store: it is the
/// counter key and the prefix of the history list keys.
#[async_trait]
pub trait Method: Send + Sync {
    /// Argument type
    type Input: Send + 'static;
    /// Return type
    type Output: Send + 'static;

    /// Name used for the operation's storage keys.
    fn qualified_name(&self) -> &str;

    /// Runs the operation.
    async fn call(&self, input: Self::Input) -> Result<Self::Output>;
}

/// Composition helpers for any [`Method`].
pub trait MethodExt: Method + Sized {
    /// Counts every call under the method's qualified name.
    fn counted<S: KvStore>(self, store: Arc<S>) -> Counted<S, Self> {
        Counted::new(store, self)
    }

    /// Records every call's input and output.
    fn recorded<S: KvStore>(self, store: Arc<S>) -> Recorded<S, Self> {
        Recorded::new(store, self)
    }
}

impl<M: Method> MethodExt for M {}

// == Counted ==
/// Increments a counter keyed by the method's name, then delegates.
///
/// The increment happens before the inner call, so failed calls are
/// counted too.
pub struct Counted<S, M> {
    store: Arc<S>,
    inner: M,
}

impl<S: KvStore, M: Method> Counted<S, M> {
    /// Wraps `inner`, counting into `store`.
    pub fn new(store: Arc<S>, inner: M) -> Self {
        Self { store, inner }
    }

    /// Returns the wrapped method.
    pub fn inner(&self) -> &M {
        &self.inner
    }
}

#[async_trait]
impl<S: KvStore, M: Method> Method for Counted<S, M> {
    type Input = M::Input;
    type Output = M::Output;

    fn qualified_name(&self) -> &str {
        self.inner.qualified_name()
    }

    async fn call(&self, input: Self::Input) -> Result<Self::Output> {
        let name = self.inner.qualified_name();
        let count = self.store.incr(name).await?;
        debug!(method = name, count = count, "call counted");
        self.inner.call(input).await
    }
}

// == Recorded ==
/// Appends each call's input and output to the method's history lists.
///
/// The input is pushed before the inner call and the output after it, as
/// two separate commands. When the inner call fails no output is pushed
/// and the lists drift apart by one.
pub struct Recorded<S, M> {
    store: Arc<S>,
    inner: M,
}

impl<S: KvStore, M: Method> Recorded<S, M> {
    /// Wraps `inner`, recording into `store`.
    pub fn new(store: Arc<S>, inner: M) -> Self {
        Self { store, inner }
    }

    /// Returns the wrapped method.
    pub fn inner(&self) -> &M {
        &self.inner
    }
}

#[async_trait]
impl<S, M> Method for Recorded<S, M>
where
    S: KvStore,
    M: Method,
    M::Input: fmt::Display,
    M::Output: fmt::Display,
{
    type Input = M::Input;
    type Output = M::Output;

    fn qualified_name(&self) -> &str {
        self.inner.qualified_name()
    }

    async fn call(&self, input: Self::Input) -> Result<Self::Output> {
        let name = self.inner.qualified_name();

        let rendered = input.to_string();
        self.store.rpush(&inputs_key(name), rendered.into_bytes()).await?;

        let output = self.inner.call(input).await?;

        self.store
            .rpush(&outputs_key(name), output.to_string().into_bytes())
            .await?;
        debug!(method = name, "call recorded");
        Ok(output)
    }
}
