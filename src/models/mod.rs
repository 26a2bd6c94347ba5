//! Data models shared by the cache and the replay utility
//!
//! This module defines the values accepted by the cache and the call
//! records read back from the history lists.

pub mod record;
pub mod value;

// Re-export commonly used types
pub use record::CallRecord;
pub use value::Value;
