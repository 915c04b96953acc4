//! Conflict report parser (pacman -S)
//!
//! pacman lists each file blocking a transaction on its own line:
//!
//! ```text
//! foo: /usr/bin/foo exists in filesystem
//! ```

use regex::Regex;
use tracing::debug;

use crate::pacman::constants::errors;

/// Build the full-line regex matching conflict reports for `package`
///
/// The package name is escaped, so names such as `gtk+` or `python3.12`
/// match literally. Group 1 is the conflicting path.
pub fn conflict_line_regex(package: &str) -> Regex {
    let pattern = format!(
        "^{}: (.*){}$",
        regex::escape(package),
        regex::escape(errors::EXISTS_IN_FILESYSTEM)
    );
    // Both pieces are escaped, so the pattern is always valid
    Regex::new(&pattern).expect("Invalid conflict line regex")
}

/// Extract the paths pacman reported as already existing for `package`
///
/// Lines are scanned in order; every matching line contributes one path,
/// duplicates included. Lines for other packages and unrelated output are
/// skipped. Returns an empty list when nothing matches.
pub fn extract_conflicts(package: &str, message: &str) -> Vec<String> {
    let re = conflict_line_regex(package);

    message
        .split('\n')
        .filter_map(|line| {
            let caps = re.captures(line)?;
            let path = caps.get(1)?.as_str();
            debug!(package, path, "got match");
            Some(path.to_string())
        })
        .collect()
}
