//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;

use serde_json::Value;
use tally::counter::CounterState;
use tempfile::TempDir;

/// Build a counter state from its three fields.
pub fn counter(count: i64, is_active: bool, data: Option<Value>) -> CounterState {
    CounterState {
        count,
        is_active,
        data,
    }
}

/// A handful of distinct states to check properties against.
pub fn sample_states() -> Vec<CounterState> {
    vec![
        CounterState::default(),
        counter(-3, true, None),
        counter(42, false, Some(serde_json::json!({"x": 1}))),
        counter(7, true, Some(serde_json::json!([1, 2, 3]))),
    ]
}

/// Write `content` to a temporary file named `name`.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}
