//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cache facade and its instrumentation against
//! the in-memory store.

use proptest::prelude::*;

use crate::cache::{get_int, get_str, Cache, STORE_METHOD};
use crate::models::Value;
use crate::store::{KvStore, MemoryStore};

// == Strategies ==
/// Generates values of every supported kind
fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<String>().prop_map(Value::Text),
        prop::collection::vec(any::<u8>(), 0..64).prop_map(Value::Bytes),
        any::<i64>().prop_map(Value::Int),
        any::<f64>().prop_map(Value::Float),
    ]
}

fn new_cache() -> Cache<MemoryStore> {
    tokio_test::block_on(Cache::new(MemoryStore::new())).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Storing a value and reading it back without a converter returns the
    // exact bytes the value encodes to.
    #[test]
    fn prop_roundtrip_raw_bytes(value in value_strategy()) {
        let cache = new_cache();

        let stored = tokio_test::block_on(async {
            let key = cache.store(value.clone()).await?;
            cache.get(&key).await
        }).unwrap();

        prop_assert_eq!(stored, Some(value.to_bytes()), "Round-trip bytes mismatch");
    }

    // Numeric text comes back as the same integer through get_int.
    #[test]
    fn prop_roundtrip_get_int(n in any::<i64>()) {
        let cache = new_cache();

        let read = tokio_test::block_on(async {
            let key = cache.store(n.to_string()).await?;
            cache.get_with(&key, get_int).await
        }).unwrap();

        prop_assert_eq!(read, Some(n));
    }

    // Text comes back unchanged through get_str.
    #[test]
    fn prop_roundtrip_get_str(text in any::<String>()) {
        let cache = new_cache();

        let read = tokio_test::block_on(async {
            let key = cache.store(text.as_str()).await?;
            cache.get_with(&key, get_str).await
        }).unwrap();

        prop_assert_eq!(read, Some(text));
    }

    // After N store calls the counter equals N.
    #[test]
    fn prop_call_count_matches_calls(values in prop::collection::vec(value_strategy(), 0..30)) {
        let cache = new_cache();
        let expected = values.len() as i64;

        let count = tokio_test::block_on(async {
            for value in values {
                cache.store(value).await?;
            }
            cache.call_count().await
        }).unwrap();

        prop_assert_eq!(count, expected, "Counter mismatch");
    }

    // After N store calls both history lists hold N entries and entry i
    // pairs input i with the key returned by call i.
    #[test]
    fn prop_history_pairs_calls(values in prop::collection::vec(value_strategy(), 0..30)) {
        let cache = new_cache();

        let (keys, history, inputs_len, outputs_len) = tokio_test::block_on(async {
            let mut keys = Vec::new();
            for value in &values {
                keys.push(cache.store(value.clone()).await?);
            }
            let history = cache.history().await?;
            let inputs = cache.backend().read_list(&format!("{}:inputs", STORE_METHOD)).await?;
            let outputs = cache.backend().read_list(&format!("{}:outputs", STORE_METHOD)).await?;
            Ok::<_, crate::error::Error>((keys, history, inputs.len(), outputs.len()))
        }).unwrap();

        prop_assert_eq!(inputs_len, values.len());
        prop_assert_eq!(outputs_len, values.len());
        prop_assert_eq!(history.len(), values.len());

        for ((record, value), key) in history.iter().zip(values.iter()).zip(keys.iter()) {
            prop_assert_eq!(&record.input, &value.to_string());
            prop_assert_eq!(&record.output, key);
        }
    }
}
