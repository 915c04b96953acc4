//! pacman output parser
//!
//! Reads conflict reports out of captured pacman output.

mod conflicts;

pub use conflicts::{conflict_line_regex, extract_conflicts};


use regex::Regex;
use std::sync::LazyLock;

use super::constants::errors;

/// Regex for the stderr line pacman prints when a transaction is aborted
/// because files it would install already exist.
///
/// Example: `error: failed to commit transaction (conflicting files)`
static CONFLICT_FAILURE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(errors::CONFLICTING_FILES).expect("Invalid conflict failure regex")
});

/// Whether pacman's stderr reports a conflicting-files failure
pub fn is_conflict_failure(stderr: &str) -> bool {
    CONFLICT_FAILURE_REGEX.is_match(stderr)
}
