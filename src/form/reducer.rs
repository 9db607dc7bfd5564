use crate::mvi::Reducer;

use super::action::{FormAction, IS_MARRIED};
use super::state::{Address, ProfileFormState};

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = ProfileFormState;
    type Action = FormAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        let FormAction::Change { name, value } = action;
        match name.as_str() {
            IS_MARRIED => ProfileFormState {
                is_married: !state.is_married,
                ..state
            },
            "userName" => ProfileFormState {
                user_name: Some(value),
                ..state
            },
            "email" => ProfileFormState {
                email: value,
                ..state
            },
            "bio" => ProfileFormState { bio: value, ..state },
            "age" => ProfileFormState { age: value, ..state },
            "street" => ProfileFormState {
                address: Address { street: value },
                ..state
            },
            _ => {
                tracing::debug!(field = %name, "ignoring change to unknown form field");
                state
            }
        }
    }
}
