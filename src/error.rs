//! Error types for the toolkit
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Error Enum ==
/// Unified error type for the cache and the document helpers.
///
/// Client failures are carried through unchanged; nothing here retries.
#[derive(Error, Debug)]
pub enum Error {
    /// The key-value store rejected the command or is unreachable
    #[error("Key-value store error: {0}")]
    Store(#[from] redis::RedisError),

    /// The document store rejected the operation or is unreachable
    #[error("Document store error: {0}")]
    Document(#[from] mongodb::error::Error),

    /// Operation against a key holding the wrong kind of value
    #[error("Wrong type for key: {0}")]
    WrongType(String),

    /// Raw bytes could not be converted to the requested type
    #[error("Conversion failed: {0}")]
    Conversion(String),
}

// == Result Type Alias ==
/// Convenience Result type for the toolkit.
pub type Result<T> = std::result::Result<T, Error>;
