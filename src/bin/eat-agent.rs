//! Entry point for `eat-agent`.
//!
//! Parses arguments, runs the selected coding agent, and exits with the
//! agent's own exit code.

use eat::cli::AgentCli;
use eat::commands;
use eat::exit_codes;
use eat::logging::init_logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = AgentCli::parse_args();

    if let Err(e) = init_logging(cli.log_level()) {
        eprintln!("Warning: {:#}", e);
    }

    match commands::cmd_agent(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(exit_codes::to_process_code(err.exit_code()))
        }
    }
}
