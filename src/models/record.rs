//! Call record model
//!
//! One entry of a method's call history.

use serde::{Deserialize, Serialize};

/// A recorded call: the rendered input and the rendered output.
///
/// Records are rebuilt by pairing the `:inputs` and `:outputs` lists of a
/// method positionally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRecord {
    /// Rendered first argument of the call
    pub input: String,
    /// Rendered return value of the call
    pub output: String,
}

impl CallRecord {
    /// Creates a new CallRecord
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}
