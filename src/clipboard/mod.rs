//! Clipboard collaborator.
//!
//! The controller only knows the [`Clipboard`] trait. The system
//! implementation pipes the text into a clipboard command's stdin, either the
//! one configured in `clipboard_command` or the first platform tool found.

mod system;

pub use system::SystemClipboard;

use crate::error::Result;

/// Destination for a generated prompt.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn write(&mut self, text: &str) -> Result<()>;
}

impl<C: Clipboard + ?Sized> Clipboard for Box<C> {
    fn write(&mut self, text: &str) -> Result<()> {
        (**self).write(text)
    }
}
