//! pacman-specific constants
//!
//! Centralized definitions for pacman command names, flags, and message patterns.

/// pacman command binary name
pub const PACMAN_COMMAND: &str = "pacman";

/// pacman operations
pub mod commands {
    /// Sync operation (install from repositories)
    pub const SYNC: &str = "-S";
}

/// pacman command flags
pub mod flags {
    /// Suppress the download/install progress bars
    pub const NO_PROGRESSBAR: &str = "--noprogressbar";
    /// Answer every prompt with its default
    pub const NO_CONFIRM: &str = "--noconfirm";
    /// Overwrite the listed files instead of reporting them as conflicts
    pub const OVERWRITE: &str = "--overwrite";
}

/// Patterns found in pacman output
pub mod errors {
    /// Pattern on stderr when a transaction aborts because of file conflicts
    pub const CONFLICTING_FILES: &str = r"failed to commit transaction \(conflicting files\)";

    /// Suffix of a single "file already exists" report line
    pub const EXISTS_IN_FILESYSTEM: &str = " exists in filesystem";
}

/// Separator pacman expects between `--overwrite` globs
pub const OVERWRITE_SEPARATOR: &str = ",";
