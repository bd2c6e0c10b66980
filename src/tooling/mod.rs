//! Tooling Layer
//!
//! Command-line front end over the workspace facade: one-shot commands and an
//! interactive shell that keeps tabs and edits alive between lines.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
