//! FakePacman helper for integration tests.
//!
//! Writes a small shell script that replays canned stdout/stderr and exit
//! code, and records the arguments it was called with.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::process::{Command, Output};

use pacman_overwrite::app::App;
use pacman_overwrite::model::Outcome;
use pacman_overwrite::pacman::{PacmanError, PacmanExecutor};
use tempfile::TempDir;

/// errno for "Text file busy", seen when a freshly written script is
/// executed while another test thread is forking.
const ETXTBSY: i32 = 26;
const MAX_ATTEMPTS: usize = 10;

/// A scripted pacman in a temporary directory.
///
/// The directory is automatically cleaned up when the FakePacman is dropped.
pub struct FakePacman {
    dir: TempDir,
}

impl FakePacman {
    /// Create a fake pacman that prints `stdout`, `stderr` and exits with `exit_code`.
    pub fn new(stdout: &str, stderr: &str, exit_code: i32) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let root = dir.path();

        fs::write(root.join("stdout.txt"), stdout).expect("Failed to write stdout fixture");
        fs::write(root.join("stderr.txt"), stderr).expect("Failed to write stderr fixture");

        let script = format!(
            "#!/bin/sh\n\
             for arg in \"$@\"; do printf '%s\\n' \"$arg\"; done > '{root}/args.txt'\n\
             cat '{root}/stdout.txt'\n\
             cat '{root}/stderr.txt' >&2\n\
             exit {exit_code}\n",
            root = root.display(),
        );
        let path = root.join("pacman");
        fs::write(&path, script).expect("Failed to write fake pacman");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake pacman executable");

        Self { dir }
    }

    /// Path to the fake pacman executable.
    pub fn path(&self) -> PathBuf {
        self.dir.path().join("pacman")
    }

    /// Arguments of the last invocation, one per element.
    pub fn recorded_args(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("args.txt"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Run the library driver against this fake pacman.
    pub fn run_app(&self, app: App, package: &str) -> Outcome {
        let app = app.with_executor(PacmanExecutor::with_program(self.path()));
        for _ in 0..MAX_ATTEMPTS {
            match app.run(package) {
                Ok(outcome) => return outcome,
                Err(PacmanError::IoError(e)) if e.raw_os_error() == Some(ETXTBSY) => {
                    std::thread::sleep(std::time::Duration::from_millis(20));
                }
                Err(e) => panic!("driver failed: {e}"),
            }
        }
        panic!("fake pacman stayed busy");
    }

    /// Run the `pacman-overwrite` binary against this fake pacman.
    pub fn run_binary(&self, args: &[&str]) -> Output {
        for _ in 0..MAX_ATTEMPTS {
            let output = Command::new(env!("CARGO_BIN_EXE_pacman-overwrite"))
                .arg("--pacman")
                .arg(self.path())
                .args(args)
                .env_remove("PACMAN_OVERWRITE_PACMAN")
                .env_remove("PACMAN_OVERWRITE_SCAN")
                .env_remove("RUST_LOG")
                .output()
                .expect("Failed to execute pacman-overwrite");

            if !String::from_utf8_lossy(&output.stderr).contains("Text file busy") {
                return output;
            }
            std::thread::sleep(std::time::Duration::from_millis(20));
        }
        panic!("fake pacman stayed busy");
    }
}
