//! Reducer for the app counter.

use crate::mvi::Reducer;

use super::action::CounterAction;
use super::state::CounterState;

/// Reducer for app counter state transitions.
///
/// Total over its input: unrecognized actions return the state unchanged.
/// Count arithmetic wraps at the `i64` bounds.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            CounterAction::Increment => CounterState {
                count: state.count.wrapping_add(1),
                ..state
            },
            CounterAction::Decrement => CounterState {
                count: state.count.wrapping_sub(1),
                ..state
            },
            CounterAction::Toggle => CounterState {
                is_active: !state.is_active,
                ..state
            },
            CounterAction::SetData { payload } => CounterState {
                data: payload,
                ..state
            },
            CounterAction::Unrecognized { .. } => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> CounterState {
        CounterState {
            count: 5,
            is_active: true,
            data: Some(json!("keep")),
        }
    }

    #[test]
    fn increment_adds_one() {
        let new = CounterReducer::reduce(sample(), CounterAction::Increment);
        assert_eq!(new, CounterState { count: 6, ..sample() });
    }

    #[test]
    fn decrement_subtracts_one() {
        let new = CounterReducer::reduce(sample(), CounterAction::Decrement);
        assert_eq!(new, CounterState { count: 4, ..sample() });
    }

    #[test]
    fn toggle_flips_active() {
        let new = CounterReducer::reduce(sample(), CounterAction::Toggle);
        assert_eq!(
            new,
            CounterState {
                is_active: false,
                ..sample()
            }
        );
    }

    #[test]
    fn set_data_replaces_data() {
        let new = CounterReducer::reduce(
            sample(),
            CounterAction::SetData {
                payload: Some(json!({"x": 1})),
            },
        );
        assert_eq!(new.data, Some(json!({"x": 1})));
        assert_eq!(new.count, 5);
        assert!(new.is_active);
    }

    #[test]
    fn unrecognized_is_noop() {
        let new = CounterReducer::reduce(
            sample(),
            CounterAction::Unrecognized {
                tag: Some("NOOP".to_string()),
            },
        );
        assert_eq!(new, sample());
    }

    #[test]
    fn increment_wraps_at_max() {
        let state = CounterState {
            count: i64::MAX,
            ..CounterState::default()
        };
        let new = CounterReducer::reduce(state, CounterAction::Increment);
        assert_eq!(new.count, i64::MIN);
    }
}
