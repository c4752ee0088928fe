//! exam-prompt: compose prompts that ask a text-generation service for exam questions.
//!
//! This is the main entry point for the `exam-prompt` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and handles errors with
//! proper exit codes.

mod cli;
mod clipboard;
mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod exit_codes;
pub mod form;
pub mod prompt;
pub mod sanitize;
mod telemetry;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    telemetry::init_tracing();

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
