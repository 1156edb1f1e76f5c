//! CLI support: command handlers and error types.
//!
//! The binary entry point lives in `main.rs`; everything it calls is
//! exposed here so the handlers can be driven directly from tests.

pub mod commands;
pub mod error;
