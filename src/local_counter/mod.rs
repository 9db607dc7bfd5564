//! Local counter driven by queued updates.
//!
//! `Add` is applied to whatever count is current when it runs, so two queued
//! `Add`s advance by two. `Set` carries a value computed by the caller from
//! an earlier snapshot, so two `Set`s built from the same snapshot advance by one.

mod action;
mod reducer;
mod state;

pub use action::LocalCounterAction;
pub use reducer::LocalCounterReducer;
pub use state::LocalCounterState;
