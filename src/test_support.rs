//! Shared helpers for unit tests.

use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::controller::Controller;
use crate::error::{AppError, Result};

/// Clipboard that records every write instead of touching the system.
#[derive(Debug, Default)]
pub(crate) struct RecordingClipboard {
    pub(crate) writes: Vec<String>,
    pub(crate) fail: bool,
}

impl RecordingClipboard {
    pub(crate) fn failing() -> Self {
        Self {
            writes: Vec::new(),
            fail: true,
        }
    }
}

impl Clipboard for RecordingClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        if self.fail {
            return Err(AppError::ClipboardError("recording clipboard set to fail".to_string()));
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}

/// Controller built from the default config with a recording clipboard.
pub(crate) fn test_controller() -> Controller<RecordingClipboard> {
    Controller::from_config(&Config::default(), RecordingClipboard::default()).unwrap()
}
