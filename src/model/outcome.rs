//! Result of one install attempt

use super::CapturedOutput;

/// Terminal state of the driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// pacman reported conflicting files
    Matched {
        /// Conflicting paths in the order pacman reported them
        conflicts: Vec<String>,
        /// Suggested `pacman -S --overwrite ...` command
        command: String,
    },
    /// pacman did not fail with the expected error
    Unmatched { capture: CapturedOutput },
}

impl Outcome {
    /// Process exit code for this outcome
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Matched { .. } => 0,
            Self::Unmatched { .. } => 1,
        }
    }
}
