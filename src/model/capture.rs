//! Captured pacman output

/// Raw output of one pacman invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    /// Standard output bytes
    pub stdout: Vec<u8>,

    /// Standard error bytes
    pub stderr: Vec<u8>,

    /// Exit code (None if terminated by a signal)
    pub exit_code: Option<i32>,
}

impl CapturedOutput {
    /// Standard output decoded as text (invalid UTF-8 is replaced)
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    /// Standard error decoded as text (invalid UTF-8 is replaced)
    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }

    /// Whether pacman exited with status 0
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}
