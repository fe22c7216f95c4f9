//! Shared test utilities: normalization of cuiguard reports so outputs with
//! non-deterministic fields (timestamps, run ids) can be compared or
//! snapshotted.

#![forbid(unsafe_code)]

use serde_json::Value;

pub const TIMESTAMP_PLACEHOLDER: &str = "__TIMESTAMP__";
pub const RUN_ID_PLACEHOLDER: &str = "__RUN_ID__";

const TIMESTAMP_KEYS: &[&str] = &["started_at", "finished_at", "created_at"];
const RUN_ID_KEYS: &[&str] = &["run_id", "base_run_id", "compare_run_id"];

/// Replace timestamps and run ids with stable placeholders, recursively.
///
/// `artifact_id` values embed the run id prefix (`<run_id>/<name>`), so the
/// prefix is rewritten while the artifact name is kept.
pub fn normalize_report(mut value: Value) -> Value {
    normalize_in_place(&mut value);
    value
}

fn normalize_in_place(value: &mut Value) {
    match value {
        Value::Object(obj) => {
            for key in TIMESTAMP_KEYS {
                if obj.contains_key(*key) {
                    obj.insert(
                        (*key).to_string(),
                        Value::String(TIMESTAMP_PLACEHOLDER.to_string()),
                    );
                }
            }
            for key in RUN_ID_KEYS {
                if obj.contains_key(*key) {
                    obj.insert(
                        (*key).to_string(),
                        Value::String(RUN_ID_PLACEHOLDER.to_string()),
                    );
                }
            }
            if let Some(Value::String(artifact_id)) = obj.get("artifact_id") {
                if let Some((_, name)) = artifact_id.split_once('/') {
                    let replaced = format!("{RUN_ID_PLACEHOLDER}/{name}");
                    obj.insert("artifact_id".to_string(), Value::String(replaced));
                }
            }
            for (_, v) in obj.iter_mut() {
                normalize_in_place(v);
            }
        }
        Value::Array(arr) => {
            for v in arr.iter_mut() {
                normalize_in_place(v);
            }
        }
        _ => {}
    }
}
