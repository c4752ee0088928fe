//! Implementation of the `exam-prompt config` subcommands.

use crate::cli::{ConfigAction, ConfigCommand};
use crate::config::Config;
use crate::error::Result;
use std::io::Write;
use tracing::info;

/// Execute an `exam-prompt config` subcommand.
pub fn cmd_config(config: &Config, cmd: ConfigCommand, out: &mut dyn Write) -> Result<()> {
    match cmd.action {
        ConfigAction::Show => {
            write!(out, "{}", config.to_yaml()?)?;
        }
        ConfigAction::Init(args) => {
            Config::write_default(&args.path, args.force)?;
            info!(path = %args.path.display(), "default config written");
            writeln!(out, "Wrote default config to {}", args.path.display())?;
        }
    }
    Ok(())
}
