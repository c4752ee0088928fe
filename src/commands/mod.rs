//! Command implementations for exam-prompt.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command runs against one config resolved up front.

mod config_cmd;
mod generate;
mod options;
mod session;

use crate::cli::{Cli, Command};
use crate::clipboard::SystemClipboard;
use crate::config::Config;
use crate::controller::Controller;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. The config is loaded
/// first so that a bad config file fails every command the same way.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;

    match cli.command {
        Command::Generate(args) => {
            let mut controller = build_controller(&config)?;
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let stderr = std::io::stderr();
            generate::cmd_generate(
                &mut controller,
                args,
                &mut stdin.lock(),
                &mut stdout.lock(),
                &mut stderr.lock(),
            )
        }
        Command::Session => {
            let mut controller = build_controller(&config)?;
            session::cmd_session(&mut controller, &config)
        }
        Command::Options(args) => options::cmd_options(&config, args, &mut std::io::stdout()),
        Command::Config(cmd) => config_cmd::cmd_config(&config, cmd, &mut std::io::stdout()),
    }
}

fn build_controller(config: &Config) -> Result<Controller<SystemClipboard>> {
    let clipboard = SystemClipboard::new(config.clipboard_command.as_deref())?;
    Controller::from_config(config, clipboard)
}
