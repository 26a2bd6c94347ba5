//! Integration Tests for the Cache
//!
//! Exercises the public cache API end to end against the in-memory store.

use std::sync::Arc;

use nosql_toolkit::cache::{get_int, get_str, render_replay, Method, MethodExt, STORE_METHOD};
use nosql_toolkit::{Cache, CallRecord, Error, KvStore, MemoryStore, Value};

// == Helper Functions ==

async fn create_test_cache() -> (Arc<MemoryStore>, Cache<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let cache = Cache::from_shared(store.clone()).await.unwrap();
    (store, cache)
}

// == Store / Get ==

#[tokio::test]
async fn test_roundtrip_every_value_kind() {
    let (_, cache) = create_test_cache().await;

    let values = vec![
        Value::from("text"),
        Value::from(b"\x00binary\xff".to_vec()),
        Value::from(-12i64),
        Value::from(0.25),
    ];

    for value in values {
        let key = cache.store(value.clone()).await.unwrap();
        assert_eq!(cache.get(&key).await.unwrap(), Some(value.to_bytes()));
    }
}

#[tokio::test]
async fn test_get_with_int_and_str() {
    let (_, cache) = create_test_cache().await;

    let numeric = cache.store("2048").await.unwrap();
    let text = cache.store("hello").await.unwrap();

    assert_eq!(cache.get_with(&numeric, get_int).await.unwrap(), Some(2048));
    assert_eq!(
        cache.get_with(&text, get_str).await.unwrap(),
        Some("hello".to_string())
    );
}

#[tokio::test]
async fn test_get_missing_key_is_not_an_error() {
    let (_, cache) = create_test_cache().await;

    assert_eq!(cache.get("does-not-exist").await.unwrap(), None);
    assert_eq!(cache.get_with("does-not-exist", get_str).await.unwrap(), None);
}

#[tokio::test]
async fn test_conversion_error_propagates() {
    let (_, cache) = create_test_cache().await;

    let key = cache.store(b"\xff\xfe".to_vec()).await.unwrap();

    assert!(matches!(
        cache.get_with(&key, get_str).await,
        Err(Error::Conversion(_))
    ));
}

// == Construction ==

#[tokio::test]
async fn test_new_cache_wipes_previous_counters_and_history() {
    let store = Arc::new(MemoryStore::new());

    let first = Cache::from_shared(store.clone()).await.unwrap();
    first.store("a").await.unwrap();
    first.store("b").await.unwrap();
    assert_eq!(first.call_count().await.unwrap(), 2);

    let second = Cache::from_shared(store.clone()).await.unwrap();
    assert_eq!(second.call_count().await.unwrap(), 0);
    assert!(second.history().await.unwrap().is_empty());
}

// == Counting and History ==

#[tokio::test]
async fn test_counter_tracks_store_calls() {
    let (store, cache) = create_test_cache().await;

    for n in 0..5 {
        cache.store(n).await.unwrap();
    }

    assert_eq!(cache.call_count().await.unwrap(), 5);
    assert_eq!(store.get(STORE_METHOD).await.unwrap(), Some(b"5".to_vec()));
}

#[tokio::test]
async fn test_history_lists_stay_parallel() {
    let (store, cache) = create_test_cache().await;

    let keys = vec![
        cache.store("first").await.unwrap(),
        cache.store("second").await.unwrap(),
        cache.store("third").await.unwrap(),
    ];

    let inputs = store.read_list("Cache.store:inputs").await.unwrap();
    let outputs = store.read_list("Cache.store:outputs").await.unwrap();
    assert_eq!(inputs.len(), 3);
    assert_eq!(outputs.len(), 3);

    let history = cache.history().await.unwrap();
    assert_eq!(
        history,
        vec![
            CallRecord::new("first", keys[0].clone()),
            CallRecord::new("second", keys[1].clone()),
            CallRecord::new("third", keys[2].clone()),
        ]
    );
}

#[tokio::test]
async fn test_replay_trace_matches_history() {
    let (_, cache) = create_test_cache().await;

    let foo = cache.store("foo").await.unwrap();
    let bar = cache.store("bar").await.unwrap();
    let number = cache.store(42).await.unwrap();

    let trace = render_replay(STORE_METHOD, &cache.history().await.unwrap());

    let expected = format!(
        "Cache.store was called 3 times:\n\
         Cache.store(foo) -> {}\n\
         Cache.store(bar) -> {}\n\
         Cache.store(42) -> {}",
        foo, bar, number
    );
    assert_eq!(trace, expected);
    assert!(cache.replay().await.is_ok());
}

#[tokio::test]
async fn test_history_records_stringified_arguments() {
    let (_, cache) = create_test_cache().await;

    let text = cache.store("foo").await.unwrap();
    let bytes = cache.store(b"bar".to_vec()).await.unwrap();
    let float = cache.store(1e20).await.unwrap();

    let inputs: Vec<String> = cache
        .history()
        .await
        .unwrap()
        .into_iter()
        .map(|record| record.input)
        .collect();
    assert_eq!(inputs, vec!["foo", "bar", "1e20"]);

    let trace = render_replay(STORE_METHOD, &cache.history().await.unwrap());
    assert!(trace.contains(&format!("Cache.store(foo) -> {}", text)));
    assert!(trace.contains(&format!("Cache.store(bar) -> {}", bytes)));
    assert!(trace.contains(&format!("Cache.store(1e20) -> {}", float)));
}

#[tokio::test]
async fn test_counter_survives_failed_history_append() {
    let (store, cache) = create_test_cache().await;

    // A plain string where the inputs list should be
    store.set("Cache.store:inputs", b"x".to_vec()).await.unwrap();

    let result = cache.store("foo").await;

    assert!(matches!(result, Err(Error::WrongType(_))));
    assert_eq!(cache.call_count().await.unwrap(), 1);
    assert!(store.read_list("Cache.store:outputs").await.unwrap().is_empty());
}

// == Instrumented Operations ==

/// Uppercases its input.
struct Shout;

#[async_trait::async_trait]
impl Method for Shout {
    type Input = String;
    type Output = String;

    fn qualified_name(&self) -> &str {
        "Text.shout"
    }

    async fn call(&self, input: String) -> nosql_toolkit::Result<String> {
        Ok(input.to_uppercase())
    }
}

#[tokio::test]
async fn test_wrappers_compose_over_any_method() {
    let store = Arc::new(MemoryStore::new());
    let shout = Shout.recorded(store.clone()).counted(store.clone());

    assert_eq!(shout.call("hey".to_string()).await.unwrap(), "HEY");
    assert_eq!(shout.call("ho".to_string()).await.unwrap(), "HO");

    assert_eq!(store.get("Text.shout").await.unwrap(), Some(b"2".to_vec()));

    let history = nosql_toolkit::cache::history(store.as_ref(), "Text.shout")
        .await
        .unwrap();
    assert_eq!(
        history,
        vec![CallRecord::new("hey", "HEY"), CallRecord::new("ho", "HO")]
    );
}
