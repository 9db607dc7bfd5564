use serde_json::json;
use tally::counter::{ActionError, CounterAction, SET_DATA, TOGGLE};

#[test]
fn missing_type_is_unrecognized() {
    let action = CounterAction::from_json(r#"{"payload": 1}"#).unwrap();
    assert_eq!(action, CounterAction::Unrecognized { tag: None });
    assert_eq!(action.tag(), None);
}

#[test]
fn unknown_tag_is_kept() {
    let action = CounterAction::from_json(r#"{"type": "NOOP"}"#).unwrap();
    assert_eq!(action.tag(), Some("NOOP"));
}

#[test]
fn set_data_without_payload_clears() {
    let action = CounterAction::from_json(r#"{"type": "SET_DATA"}"#).unwrap();
    assert_eq!(action, CounterAction::SetData { payload: None });
}

#[test]
fn payload_on_other_tags_is_ignored() {
    let action = CounterAction::from_json(r#"{"type": "TOGGLE", "payload": 9}"#).unwrap();
    assert_eq!(action, CounterAction::Toggle);
    assert_eq!(action.tag(), Some(TOGGLE));
}

#[test]
fn array_payload_round_trips_into_action() {
    let action = CounterAction::from_json(r#"{"type": "SET_DATA", "payload": [1, 2]}"#).unwrap();
    assert_eq!(action.tag(), Some(SET_DATA));
    assert_eq!(
        action,
        CounterAction::SetData {
            payload: Some(json!([1, 2]))
        }
    );
}

#[test]
fn malformed_json_fails() {
    let err = CounterAction::from_json("{not json").unwrap_err();
    assert!(matches!(err, ActionError::Malformed { ref input, .. } if input == "{not json"));
}

#[test]
fn non_object_fails() {
    assert!(CounterAction::from_json("42").is_err());
    assert!(CounterAction::from_json(r#"{"type": 5}"#).is_err());
}

#[test]
fn bare_token_decodes() {
    assert_eq!(
        CounterAction::from_token("INCREMENT").unwrap(),
        CounterAction::Increment
    );
    assert_eq!(
        CounterAction::from_token("whatever").unwrap(),
        CounterAction::Unrecognized {
            tag: Some("whatever".to_string())
        }
    );
}

#[test]
fn token_null_payload_clears() {
    assert_eq!(
        CounterAction::from_token("SET_DATA=null").unwrap(),
        CounterAction::SetData { payload: None }
    );
}
