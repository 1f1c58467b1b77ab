//! Library half of the `lox` command-line tool.
//!
//! The binary in `main.rs` parses arguments and dispatches to
//! [`commands`]; everything that renders output takes an `io::Write` so it
//! can be driven from tests.

pub mod commands;
pub mod error;
pub mod tracing_setup;

pub use error::CliError;
