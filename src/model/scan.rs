//! Which captured stream holds the conflict report

use std::fmt;

use super::CapturedOutput;

/// Stream(s) scanned for `<pkg>: <path> exists in filesystem` lines
///
/// The failure signature is always looked up on stderr. Historically the
/// conflict lines were read from stdout, which stays the default; current
/// pacman releases print them on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ScanStream {
    #[default]
    Stdout,
    Stderr,
    /// stdout followed by stderr
    Both,
}

impl ScanStream {
    /// Text to scan from a capture
    pub fn select(self, capture: &CapturedOutput) -> String {
        match self {
            Self::Stdout => capture.stdout_text(),
            Self::Stderr => capture.stderr_text(),
            Self::Both => {
                let mut text = capture.stdout_text();
                if !text.is_empty() && !text.ends_with('\n') {
                    text.push('\n');
                }
                text.push_str(&capture.stderr_text());
                text
            }
        }
    }
}

impl fmt::Display for ScanStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
            Self::Both => "both",
        };
        f.write_str(name)
    }
}
