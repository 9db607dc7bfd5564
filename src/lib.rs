//! State reducers with a small dispatcher and a replay CLI.

pub mod cli;
pub mod config;
pub mod counter;
pub mod form;
pub mod local_counter;
pub mod logging;
pub mod mvi;
pub mod store;
