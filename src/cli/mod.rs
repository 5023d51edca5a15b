//! Console front end: the shell loop, command handlers, and output helpers.
//!
//! All business semantics live in [`crate::ledger`] and [`crate::services`];
//! this layer only parses lines, calls into the core, and renders text.

mod commands;
mod context;
pub mod output;
pub mod shell;

pub use context::{CliError, CliMode, CommandError, ShellContext};
pub use shell::run_cli;
