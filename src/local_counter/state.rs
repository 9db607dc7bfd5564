use serde::Serialize;

use crate::mvi::ModelState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LocalCounterState {
    pub count: i64,
}

impl ModelState for LocalCounterState {}
