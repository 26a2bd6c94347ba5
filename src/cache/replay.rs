//! Replay Module
//!
//! Reads a method's call history back from the store and prints it.

use tracing::warn;

use crate::cache::instrument::{inputs_key, outputs_key};
use crate::error::Result;
use crate::models::CallRecord;
use crate::store::KvStore;

// == History ==
/// Pairs the recorded inputs and outputs of `method_name` positionally.
///
/// If the two lists have different lengths (a recorded call failed, or a
/// crash hit between the two appends) only the complete pairs are returned.
pub async fn history<S>(store: &S, method_name: &str) -> Result<Vec<CallRecord>>
where
    S: KvStore + ?Sized,
{
    let inputs = store.read_list(&inputs_key(method_name)).await?;
    let outputs = store.read_list(&outputs_key(method_name)).await?;

    if inputs.len() != outputs.len() {
        warn!(
            method = method_name,
            inputs = inputs.len(),
            outputs = outputs.len(),
            "call history lists differ in length"
        );
    }

    Ok(inputs
        .iter()
        .zip(outputs.iter())
        .map(|(input, output)| {
            CallRecord::new(
                String::from_utf8_lossy(input),
                String::from_utf8_lossy(output),
            )
        })
        .collect())
}

// == Render ==
/// Formats a call trace: a header with the call count, then one line per call.
pub fn render_replay(method_name: &str, records: &[CallRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(format!(
        "{} was called {} times:",
        method_name,
        records.len()
    ));
    lines.extend(
        records
            .iter()
            .map(|record| format!("{}({}) -> {}", method_name, record.input, record.output)),
    );
    lines.join("\n")
}

// == Replay ==
/// Prints the call history of `method_name` to stdout.
pub async fn replay<S>(store: &S, method_name: &str) -> Result<()>
where
    S: KvStore + ?Sized,
{
    let records = history(store, method_name).await?;
    println!("{}", render_replay(method_name, &records));
    Ok(())
}
