//! pm-cli library
//!
//! Terminal host for the project board: argument parsing, the interactive
//! session, one-shot commands and logger setup.

pub mod cli;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod logger;
pub mod session;
pub mod terminal;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use session::{SessionSummary, run_session};
pub use terminal::{WriterAlert, WriterListSurface};
