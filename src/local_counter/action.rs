use crate::mvi::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalCounterAction {
    /// Functional update: current count + 1.
    Add,
    /// Value update: replace the count.
    Set { value: i64 },
}

impl Action for LocalCounterAction {}
