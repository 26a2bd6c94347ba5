//! Converters
//!
//! Turn the raw bytes read from the store back into typed values. Pass them
//! to [`Cache::get_with`](crate::cache::Cache::get_with).

use crate::error::{Error, Result};

// == Get Int ==
/// Parses raw bytes holding decimal text as an integer.
///
/// Surrounding whitespace is ignored.
pub fn get_int(data: &[u8]) -> Result<i64> {
    let text = get_str(data)?;
    text.trim()
        .parse::<i64>()
        .map_err(|e| Error::Conversion(format!("{:?} is not an integer: {}", text, e)))
}

// == Get Str ==
/// Decodes raw bytes as UTF-8 text.
pub fn get_str(data: &[u8]) -> Result<String> {
    String::from_utf8(data.to_vec())
        .map_err(|e| Error::Conversion(format!("value is not valid UTF-8: {}", e)))
}
