//! Application state and logic for pacman-overwrite

use tracing::{info, warn};

use crate::model::{CapturedOutput, Outcome, ScanStream};
use crate::pacman::{
    PacmanError, PacmanExecutor, build_overwrite_command, extract_conflicts, is_conflict_failure,
};

/// Main application state
#[derive(Debug, Clone)]
pub struct App {
    /// pacman executor
    pub executor: PacmanExecutor,
    /// Stream(s) scanned for conflict lines
    pub scan: ScanStream,
    /// Name shown in the "did not get expected error" diagnostic
    pub program_name: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App running `pacman` from PATH
    pub fn new() -> Self {
        Self {
            executor: PacmanExecutor::new(),
            scan: ScanStream::default(),
            program_name: env!("CARGO_PKG_NAME").to_string(),
        }
    }

    /// Use a specific executor
    pub fn with_executor(mut self, executor: PacmanExecutor) -> Self {
        self.executor = executor;
        self
    }

    /// Scan the given stream(s) for conflict lines
    pub fn with_scan(mut self, scan: ScanStream) -> Self {
        self.scan = scan;
        self
    }

    /// Set the program name used in diagnostics
    pub fn with_program_name(mut self, name: impl Into<String>) -> Self {
        self.program_name = name.into();
        self
    }

    /// Attempt the install and classify pacman's response
    ///
    /// Blocks until pacman exits. Only a failure to launch pacman is an error.
    pub fn run(&self, package: &str) -> Result<Outcome, PacmanError> {
        info!(package, "attempting install");
        let capture = self.executor.install_attempt(package)?;
        Ok(self.classify(package, capture))
    }

    /// Decide the terminal state for a finished install attempt
    pub fn classify(&self, package: &str, capture: CapturedOutput) -> Outcome {
        if !is_conflict_failure(&capture.stderr_text()) {
            info!(exit_code = ?capture.exit_code, "conflicting files error not reported");
            return Outcome::Unmatched { capture };
        }

        let conflicts = extract_conflicts(package, &self.scan.select(&capture));
        if conflicts.is_empty() {
            warn!(
                package,
                scan = %self.scan,
                "pacman reported conflicting files but none were found in the scanned output"
            );
        } else {
            info!(package, count = conflicts.len(), "found conflicting files");
        }

        let command = build_overwrite_command(package, &conflicts);
        Outcome::Matched { conflicts, command }
    }
}
