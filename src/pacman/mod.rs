//! pacman command execution layer
//!
//! This module handles running pacman, reading its conflict reports,
//! and building the follow-up `--overwrite` command.

mod command;
pub mod constants;
mod executor;
/// Parser module (public for integration testing)
pub mod parser;

pub use command::build_overwrite_command;
pub use executor::PacmanExecutor;
pub use parser::{extract_conflicts, is_conflict_failure};

use std::io;
use thiserror::Error;

/// Errors that can occur when launching pacman
#[derive(Error, Debug)]
pub enum PacmanError {
    #[error("{program} is not installed or not in PATH")]
    PacmanNotFound { program: String },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}
