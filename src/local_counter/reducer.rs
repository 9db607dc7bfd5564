use crate::mvi::Reducer;

use super::action::LocalCounterAction;
use super::state::LocalCounterState;

pub struct LocalCounterReducer;

impl Reducer for LocalCounterReducer {
    type State = LocalCounterState;
    type Action = LocalCounterAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            LocalCounterAction::Add => LocalCounterState {
                count: state.count.wrapping_add(1),
            },
            LocalCounterAction::Set { value } => LocalCounterState { count: value },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_twice_advances_by_two() {
        let state = LocalCounterState::default();
        let state = LocalCounterReducer::reduce(state, LocalCounterAction::Add);
        let state = LocalCounterReducer::reduce(state, LocalCounterAction::Add);
        assert_eq!(state.count, 2);
    }

    #[test]
    fn set_from_same_snapshot_advances_by_one() {
        let snapshot = LocalCounterState::default();
        let next = snapshot.count + 1;
        let state = LocalCounterReducer::reduce(snapshot, LocalCounterAction::Set { value: next });
        let state = LocalCounterReducer::reduce(state, LocalCounterAction::Set { value: next });
        assert_eq!(state.count, 1);
    }
}
