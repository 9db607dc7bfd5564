use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::counter::CounterState;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub initial: InitialState,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Counter state the session starts from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InitialState {
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub is_active: bool,
    /// Any TOML value; converted to JSON when the state is built.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level used when `RUST_LOG` is unset (default: "warn").
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl From<InitialState> for CounterState {
    fn from(initial: InitialState) -> Self {
        CounterState {
            count: initial.count,
            is_active: initial.is_active,
            data: initial.data,
        }
    }
}
