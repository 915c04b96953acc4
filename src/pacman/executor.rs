//! pacman command executor
//!
//! Handles running pacman and capturing its output.

use std::ffi::OsString;
use std::process::{Command, Stdio};

use tracing::debug;

use super::PacmanError;
use super::constants::{self, commands, flags};
use crate::model::CapturedOutput;

/// Executor for pacman commands
#[derive(Debug, Clone)]
pub struct PacmanExecutor {
    /// Program to invoke in place of `pacman`
    program: OsString,
}

impl Default for PacmanExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl PacmanExecutor {
    /// Create a new executor that runs `pacman` from PATH
    pub fn new() -> Self {
        Self {
            program: OsString::from(constants::PACMAN_COMMAND),
        }
    }

    /// Create a new executor for a specific pacman binary
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Program this executor invokes
    pub fn program(&self) -> &OsString {
        &self.program
    }

    /// Run pacman with the given arguments
    ///
    /// Both streams are captured as raw bytes. The exit status is recorded
    /// but never turned into an error: callers decide what a failure means.
    pub fn run(&self, args: &[&str]) -> Result<CapturedOutput, PacmanError> {
        debug!(program = ?self.program, ?args, "running pacman");

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    PacmanError::PacmanNotFound {
                        program: self.program.to_string_lossy().into_owned(),
                    }
                } else {
                    PacmanError::IoError(e)
                }
            })?;

        debug!(exit_code = ?output.status.code(), "pacman exited");

        Ok(CapturedOutput {
            stdout: output.stdout,
            stderr: output.stderr,
            exit_code: output.status.code(),
        })
    }

    /// Run `pacman -S <package> --noprogressbar --noconfirm`
    ///
    /// This is expected to fail when the package's files already exist on disk.
    pub fn install_attempt(&self, package: &str) -> Result<CapturedOutput, PacmanError> {
        self.run(&install_args(package))
    }
}

/// Arguments for a non-interactive install attempt
fn install_args(package: &str) -> [&str; 4] {
    [
        commands::SYNC,
        package,
        flags::NO_PROGRESSBAR,
        flags::NO_CONFIRM,
    ]
}
