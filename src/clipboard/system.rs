//! Clipboard backed by an external command.

use super::Clipboard;
use crate::error::{AppError, Result};
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Platform clipboard commands, tried in order when none is configured.
const CANDIDATES: &[&[&str]] = &[
    &["pbcopy"],
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
    &["clip.exe"],
];

/// Writes to the clipboard by running a command and feeding it the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemClipboard {
    /// Explicit program and arguments; `None` means auto-detect.
    command: Option<Vec<String>>,
}

impl SystemClipboard {
    /// Use `command_line` (split with shell quoting rules) if given.
    pub fn new(command_line: Option<&str>) -> Result<Self> {
        let command = match command_line.map(str::trim).filter(|c| !c.is_empty()) {
            Some(line) => {
                let args = shell_words::split(line).map_err(|e| {
                    AppError::ConfigError(format!(
                        "failed to parse clipboard_command '{}': {}",
                        line, e
                    ))
                })?;
                if args.is_empty() {
                    return Err(AppError::ConfigError(
                        "clipboard_command is empty".to_string(),
                    ));
                }
                Some(args)
            }
            None => None,
        };
        Ok(Self { command })
    }

    /// The configured command, if any.
    pub fn command(&self) -> Option<&[String]> {
        self.command.as_deref()
    }
}

impl Clipboard for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        if let Some(args) = &self.command {
            return pipe_to(args, text);
        }

        for candidate in CANDIDATES {
            let args: Vec<String> = candidate.iter().map(|s| s.to_string()).collect();
            match pipe_to(&args, text) {
                Ok(()) => return Ok(()),
                Err(e) => debug!(command = %candidate[0], error = %e, "clipboard candidate failed"),
            }
        }

        warn!("no clipboard command succeeded");
        Err(AppError::ClipboardError(format!(
            "no clipboard command available (tried: {}). Set clipboard_command in the config file.",
            CANDIDATES
                .iter()
                .map(|c| c.join(" "))
                .collect::<Vec<_>>()
                .join(", ")
        )))
    }
}

/// Run `args[0]` with the remaining arguments and write `text` to its stdin.
///
/// Only the exit status is collected. `xclip`, `xsel` and `wl-copy` leave a
/// background process serving the selection, so output pipes would never
/// reach EOF.
fn pipe_to(args: &[String], text: &str) -> Result<()> {
    let (program, rest) = args
        .split_first()
        .ok_or_else(|| AppError::ClipboardError("empty clipboard command".to_string()))?;

    let mut child = Command::new(program)
        .args(rest)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| AppError::ClipboardError(format!("failed to run '{}': {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).map_err(|e| {
            AppError::ClipboardError(format!("failed to write to '{}': {}", program, e))
        })?;
        // stdin dropped here so the command sees EOF
    }

    let status = child.wait().map_err(|e| {
        AppError::ClipboardError(format!("failed to wait for '{}': {}", program, e))
    })?;

    if status.success() {
        debug!(command = %program, bytes = text.len(), "clipboard written");
        Ok(())
    } else {
        Err(AppError::ClipboardError(format!(
            "'{}' exited with code {}",
            program,
            status.code().unwrap_or(-1)
        )))
    }
}
