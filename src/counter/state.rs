use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::mvi::ModelState;

/// Snapshot of the app counter.
///
/// Serializes with the field names the presentation layer reads:
/// `{"count": 0, "isActive": false, "data": null}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterState {
    pub count: i64,
    pub is_active: bool,
    /// JSON `null` and an absent value are both `None`.
    #[serde(default)]
    pub data: Option<Value>,
}

impl ModelState for CounterState {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_is_zeroed() {
        let state = CounterState::default();
        assert_eq!(state.count, 0);
        assert!(!state.is_active);
        assert!(state.data.is_none());
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let state = CounterState {
            count: 3,
            is_active: true,
            data: Some(json!({"x": 1})),
        };
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value, json!({"count": 3, "isActive": true, "data": {"x": 1}}));
    }

    #[test]
    fn absent_data_serializes_as_null() {
        let value = serde_json::to_value(CounterState::default()).unwrap();
        assert_eq!(value, json!({"count": 0, "isActive": false, "data": null}));
    }
}
