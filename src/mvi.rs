//! The three pieces every feature in this crate is built from.
//!
//! A feature is a state record, an action enum and a unit struct implementing
//! [`Reducer`]. The [`Store`](crate::store::Store) is the only caller that
//! keeps state between reductions.

use serde::Serialize;

/// A request to move a feature to another state.
///
/// `Debug` is required so the store can log what it dispatched.
pub trait Action: std::fmt::Debug + Send + 'static {}

/// A snapshot of one feature.
///
/// `Default` is the state a session starts from. `PartialEq` lets the store
/// skip notifying when a dispatch changed nothing. Every state can be printed
/// as JSON.
pub trait ModelState: Clone + PartialEq + Default + Serialize + Send + 'static {}

/// Computes the next state of a feature.
pub trait Reducer {
    type State: ModelState;
    type Action: Action;

    /// Returns the state after `action`.
    ///
    /// Total and pure: never fails, never performs I/O, and for an action the
    /// reducer does not recognize returns `state` unchanged.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::CounterState;
    use crate::form::ProfileFormState;
    use crate::local_counter::LocalCounterState;
    use serde_json::json;

    fn render<S: ModelState>(state: &S) -> serde_json::Value {
        serde_json::to_value(state).unwrap()
    }

    #[test]
    fn every_default_state_renders_as_json() {
        assert_eq!(
            render(&CounterState::default()),
            json!({"count": 0, "isActive": false, "data": null})
        );
        assert_eq!(render(&LocalCounterState::default()), json!({"count": 0}));
        assert_eq!(render(&ProfileFormState::default())["age"], json!("0"));
    }
}
