//! Configuration Module
//!
//! Handles loading connection settings from environment variables.

use std::env;

const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379/";
const DEFAULT_MONGO_URI: &str = "mongodb://127.0.0.1:27017";
const DEFAULT_MONGO_DATABASE: &str = "my_db";
const DEFAULT_MONGO_COLLECTION: &str = "school";

/// Connection settings for the two database clients.
///
/// All values can be configured via environment variables with local defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redis connection URL
    pub redis_url: String,
    /// MongoDB connection string
    pub mongo_uri: String,
    /// Database holding the document collection
    pub mongo_database: String,
    /// Document collection used by the helpers
    pub mongo_collection: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `REDIS_URL` - Redis URL (default: redis://127.0.0.1:6379/)
    /// - `MONGO_URI` - MongoDB connection string (default: mongodb://127.0.0.1:27017)
    /// - `MONGO_DATABASE` - Database name (default: my_db)
    /// - `MONGO_COLLECTION` - Collection name (default: school)
    pub fn from_env() -> Self {
        Self {
            redis_url: env_or("REDIS_URL", DEFAULT_REDIS_URL),
            mongo_uri: env_or("MONGO_URI", DEFAULT_MONGO_URI),
            mongo_database: env_or("MONGO_DATABASE", DEFAULT_MONGO_DATABASE),
            mongo_collection: env_or("MONGO_COLLECTION", DEFAULT_MONGO_COLLECTION),
        }
    }
}

/// Reads a non-empty environment variable or falls back to `default`.
fn env_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_url: DEFAULT_REDIS_URL.to_string(),
            mongo_uri: DEFAULT_MONGO_URI.to_string(),
            mongo_database: DEFAULT_MONGO_DATABASE.to_string(),
            mongo_collection: DEFAULT_MONGO_COLLECTION.to_string(),
        }
    }
}
