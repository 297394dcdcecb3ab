//! Command implementations for HOP CLI
//!
//! Each command module provides a `run` function that executes the command logic.

pub mod inspect;
pub mod path;
