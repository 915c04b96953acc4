//! Printing the outcome of an install attempt

use std::io::{self, Write};

use super::state::App;
use crate::model::Outcome;

/// Preface printed before the suggested command
const MATCHED_HEADER: &str = "Use the following command to overwrite the conflicting files:";

impl App {
    /// Write the outcome in the format users copy commands from
    pub fn render(&self, outcome: &Outcome, out: &mut impl Write) -> io::Result<()> {
        match outcome {
            Outcome::Matched { command, .. } => {
                writeln!(out, "{MATCHED_HEADER}")?;
                writeln!(out, "\t{command}")?;
            }
            Outcome::Unmatched { capture } => {
                write_stream(out, "stdout", &capture.stdout_text())?;
                write_stream(out, "stderr", &capture.stderr_text())?;
                writeln!(
                    out,
                    "{}: Did not get expected error message.",
                    self.program_name
                )?;
                writeln!(out, "stdout and stderr are printed above...")?;
            }
        }
        Ok(())
    }
}

/// Dump one captured stream under a `===name===` header, skipping empty ones
fn write_stream(out: &mut impl Write, name: &str, text: &str) -> io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }

    writeln!(out, "==={name}===")?;
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}
