//! NoSQL Toolkit demo
//!
//! Runs the cache and the collection helpers against local Redis and
//! MongoDB servers.

use anyhow::Context;
use futures::TryStreamExt;
use mongodb::bson::doc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nosql_toolkit::cache::{get_int, get_str};
use nosql_toolkit::documents::{connect_collection, insert_school, list_all};
use nosql_toolkit::{Cache, Config, RedisStore};

/// Entry point for the demo.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Connect to Redis and build the cache (flushes the database)
/// 4. Store values of each kind, read them back, replay the store calls
/// 5. Connect to MongoDB, insert a school, list the collection
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nosql_toolkit=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: redis_url={}, mongo_uri={}, collection={}.{}",
        config.redis_url, config.mongo_uri, config.mongo_database, config.mongo_collection
    );

    run_cache_demo(&config).await?;
    run_documents_demo(&config).await?;

    Ok(())
}

async fn run_cache_demo(config: &Config) -> anyhow::Result<()> {
    let store = RedisStore::connect(&config.redis_url)
        .await
        .with_context(|| format!("connecting to Redis at {}", config.redis_url))?;
    let cache = Cache::new(store).await.context("initializing cache")?;

    let text_key = cache.store("foo").await?;
    let bytes_key = cache.store(b"bar".to_vec()).await?;
    let int_key = cache.store(123).await?;
    let float_key = cache.store(3.5).await?;

    println!("{} -> {:?}", text_key, cache.get_with(&text_key, get_str).await?);
    println!(
        "{} -> {:?}",
        bytes_key,
        cache
            .get(&bytes_key)
            .await?
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    );
    println!("{} -> {:?}", int_key, cache.get_with(&int_key, get_int).await?);
    println!("{} -> {:?}", float_key, cache.get_with(&float_key, get_str).await?);

    println!("store was called {} times", cache.call_count().await?);
    cache.replay().await?;

    Ok(())
}

async fn run_documents_demo(config: &Config) -> anyhow::Result<()> {
    let collection = connect_collection(config)
        .await
        .with_context(|| format!("connecting to MongoDB at {}", config.mongo_uri))?;

    let id = insert_school(
        &collection,
        doc! { "name": "UCSF", "address": "505 Parnassus Ave" },
    )
    .await?;
    info!("Inserted school with id {}", id);

    let mut documents = list_all(&collection).await?;
    while let Some(document) = documents.try_next().await? {
        println!("{}", serde_json::to_string(&document)?);
    }

    Ok(())
}
