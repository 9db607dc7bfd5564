use thiserror::Error;

use crate::mvi::Action;

/// Field name of the married checkbox.
pub const IS_MARRIED: &str = "isMarried";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// An input named `name` changed to `value`.
    Change { name: String, value: String },
}

impl Action for FormAction {}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("Expected NAME=VALUE, got '{0}'")]
    MissingSeparator(String),
}

impl FormAction {
    pub fn change(name: impl Into<String>, value: impl Into<String>) -> Self {
        FormAction::Change {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Parse a `NAME=VALUE` token. The value may be empty; checkbox fields
    /// also accept a bare `NAME`.
    pub fn from_token(token: &str) -> Result<Self, FormError> {
        match token.split_once('=') {
            Some((name, value)) => Ok(Self::change(name, value)),
            None if token == IS_MARRIED => Ok(Self::change(token, "")),
            None => Err(FormError::MissingSeparator(token.to_string())),
        }
    }
}
