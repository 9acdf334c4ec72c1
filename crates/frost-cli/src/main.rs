//! # frost
//!
//! Suspend the system, either to RAM or a swap partition, by writing the
//! matching keyword to the kernel power-state file.

use std::process::ExitCode;

use frost_power::PowerSwitch;
use tracing::debug;

mod args;

use args::ParsedCommand;

/// Fallback program name for the usage message when argv is empty.
const PROG_NAME: &str = "frost";

fn main() -> ExitCode {
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }

    // Diagnostics go to stderr; stdout is reserved for the usage message.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("FROST_LOG")
                .or_else(|_| tracing_subscriber::EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let argv: Vec<String> = std::env::args().collect();
    run(&argv)
}

fn run(argv: &[String]) -> ExitCode {
    let prog = argv.first().map(String::as_str).unwrap_or(PROG_NAME);

    match args::parse(argv.get(1..).unwrap_or(&[])) {
        ParsedCommand::Help => {
            print!("{}", args::usage(prog));
            ExitCode::SUCCESS
        }
        ParsedCommand::Invalid(reason) => {
            debug!("rejecting command line: {reason}");
            print!("{}", args::usage(prog));
            ExitCode::FAILURE
        }
        ParsedCommand::Suspend(mode) => match PowerSwitch::new().suspend(mode) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                debug!("suspend request failed: {err}");
                ExitCode::FAILURE
            }
        },
    }
}
