//! Overwrite command builder

use super::constants::{OVERWRITE_SEPARATOR, PACMAN_COMMAND, commands, flags};

/// Build the command that reinstalls `package` while overwriting `files`
///
/// Files are joined with commas. An empty list still yields a well-formed
/// command with an empty `--overwrite` value.
pub fn build_overwrite_command<S: AsRef<str>>(package: &str, files: &[S]) -> String {
    let joined = files
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(OVERWRITE_SEPARATOR);

    format!(
        "{} {} {} {} {}",
        PACMAN_COMMAND,
        commands::SYNC,
        flags::OVERWRITE,
        joined,
        package
    )
}
