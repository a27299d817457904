//! CLI integration tests for the `loghue` binary.

mod config_custom;
mod fatal_error;
mod mixed_input;
