//! pacman-overwrite
//!
//! Binary entry point: runs one install attempt and prints the suggested
//! overwrite command.

use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pacman_overwrite::app::App;
use pacman_overwrite::model::ScanStream;
use pacman_overwrite::pacman::PacmanExecutor;
use pacman_overwrite::pacman::constants::PACMAN_COMMAND;

/// Overwrite all 'file exists' errors for a package.
#[derive(Parser, Debug)]
#[command(name = "pacman-overwrite", version, long_about = None)]
struct Cli {
    /// Name of the package
    package: String,

    /// pacman binary to invoke
    #[arg(long, env = "PACMAN_OVERWRITE_PACMAN", default_value = PACMAN_COMMAND)]
    pacman: OsString,

    /// Output stream(s) scanned for "exists in filesystem" lines
    #[arg(long, value_enum, env = "PACMAN_OVERWRITE_SCAN", default_value_t = ScanStream::Stdout)]
    scan: ScanStream,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let app = App::new()
        .with_executor(PacmanExecutor::with_program(cli.pacman))
        .with_scan(cli.scan)
        .with_program_name(program_name());

    let outcome = app.run(&cli.package)?;
    app.render(&outcome, &mut io::stdout().lock())?;

    Ok(ExitCode::from(outcome.exit_code()))
}

/// Log to stderr so the suggested command on stdout stays clean.
///
/// `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Name this program was invoked as
fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(|arg0| arg0.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_BIN_NAME").to_string())
}
