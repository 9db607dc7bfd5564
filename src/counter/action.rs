//! Actions for the app counter and their JSON wire form.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::mvi::Action;

pub const INCREMENT: &str = "INCREMENT";
pub const DECREMENT: &str = "DECREMENT";
pub const TOGGLE: &str = "TOGGLE";
pub const SET_DATA: &str = "SET_DATA";

/// Actions that can be dispatched to the counter reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum CounterAction {
    Increment,
    Decrement,
    Toggle,
    /// Replace `data`. `None` clears it.
    SetData { payload: Option<Value> },
    /// Any tag the reducer does not know, or no tag at all. Reduces to a no-op.
    Unrecognized { tag: Option<String> },
}

impl Action for CounterAction {}

/// Errors that can occur when decoding an action.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Malformed action '{input}': {source}")]
    Malformed {
        input: String,
        #[source]
        source: serde_json::Error,
    },
}

/// `{"type": "...", "payload": ...}` as it arrives on the wire.
#[derive(Debug, Deserialize)]
struct RawAction {
    #[serde(rename = "type", default)]
    tag: Option<String>,
    #[serde(default)]
    payload: Option<Value>,
}

impl From<RawAction> for CounterAction {
    fn from(raw: RawAction) -> Self {
        match raw.tag.as_deref() {
            Some(INCREMENT) => CounterAction::Increment,
            Some(DECREMENT) => CounterAction::Decrement,
            Some(TOGGLE) => CounterAction::Toggle,
            Some(SET_DATA) => CounterAction::SetData {
                payload: raw.payload,
            },
            _ => {
                tracing::debug!(tag = ?raw.tag, "unrecognized action tag");
                CounterAction::Unrecognized { tag: raw.tag }
            }
        }
    }
}

impl CounterAction {
    /// Decode a JSON action object.
    ///
    /// Only malformed JSON fails. Unknown or missing tags decode to
    /// [`CounterAction::Unrecognized`].
    pub fn from_json(input: &str) -> Result<Self, ActionError> {
        let raw: RawAction =
            serde_json::from_str(input).map_err(|source| ActionError::Malformed {
                input: input.to_string(),
                source,
            })?;
        Ok(raw.into())
    }

    /// Decode a command-line token: `TAG` or `TAG=<json payload>`.
    pub fn from_token(token: &str) -> Result<Self, ActionError> {
        let (tag, payload) = match token.split_once('=') {
            Some((tag, raw)) => {
                let value: Value =
                    serde_json::from_str(raw).map_err(|source| ActionError::Malformed {
                        input: token.to_string(),
                        source,
                    })?;
                (tag, Some(value).filter(|v| !v.is_null()))
            }
            None => (token, None),
        };

        Ok(RawAction {
            tag: Some(tag.to_string()),
            payload,
        }
        .into())
    }

    /// The wire tag of this action, if it has one.
    pub fn tag(&self) -> Option<&str> {
        match self {
            CounterAction::Increment => Some(INCREMENT),
            CounterAction::Decrement => Some(DECREMENT),
            CounterAction::Toggle => Some(TOGGLE),
            CounterAction::SetData { .. } => Some(SET_DATA),
            CounterAction::Unrecognized { tag } => tag.as_deref(),
        }
    }
}
