//! Profile form state.
//!
//! Each edit arrives as a `(field name, raw value)` change event. The
//! `isMarried` checkbox toggles instead of taking the submitted value.

mod action;
mod reducer;
mod state;

pub use action::{FormAction, FormError, IS_MARRIED};
pub use reducer::FormReducer;
pub use state::{Address, ProfileFormState};
