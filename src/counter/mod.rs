//! Reducer-based app counter.
//!
//! Holds a count, an active flag and an arbitrary JSON data slot.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - The counter record (`count`, `isActive`, `data`)
//! - `action.rs` - Tagged actions and their JSON wire form
//! - `reducer.rs` - State transitions (pure, no side effects)

mod action;
mod reducer;
mod state;

pub use action::{ActionError, CounterAction, DECREMENT, INCREMENT, SET_DATA, TOGGLE};
pub use reducer::CounterReducer;
pub use state::CounterState;
