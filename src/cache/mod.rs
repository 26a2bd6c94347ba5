//! Cache Module
//!
//! Cache facade over a key-value store, with call counting and call
//! history recorded in the same store.

mod convert;
mod facade;
pub mod instrument;
pub mod replay;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use convert::{get_int, get_str};
pub use facade::{Cache, StoreValue, STORE_METHOD};
pub use instrument::{Counted, Method, MethodExt, Recorded};
pub use replay::{history, render_replay};
