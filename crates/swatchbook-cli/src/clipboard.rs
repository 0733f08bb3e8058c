//! Clipboard writing via platform commands.
//!
//! `pbcopy` on macOS, `xclip` on Linux, unsupported elsewhere. The trait
//! exists so tests can capture writes without touching the real clipboard.

use thiserror::Error;

/// Errors from the system clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard command failed: {0}")]
    CommandFailed(String),

    #[error("clipboard not supported on this platform")]
    Unsupported,
}

/// Abstraction over clipboard writing.
pub trait Clipboard {
    /// Place `text` on the clipboard.
    fn write(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Real clipboard writer using platform commands.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write(&self, text: &str) -> Result<(), ClipboardError> {
        write_clipboard_impl(text)
    }
}

#[cfg(target_os = "macos")]
fn write_clipboard_impl(text: &str) -> Result<(), ClipboardError> {
    pipe_to_command("pbcopy", &[], text)
}

#[cfg(target_os = "linux")]
fn write_clipboard_impl(text: &str) -> Result<(), ClipboardError> {
    pipe_to_command("xclip", &["-selection", "clipboard", "-i"], text)
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn write_clipboard_impl(_text: &str) -> Result<(), ClipboardError> {
    Err(ClipboardError::Unsupported)
}

#[cfg(any(target_os = "macos", target_os = "linux"))]
fn pipe_to_command(program: &str, args: &[&str], text: &str) -> Result<(), ClipboardError> {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| ClipboardError::CommandFailed(e.to_string()))?;

    if let Some(stdin) = child.stdin.as_mut() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| ClipboardError::CommandFailed(e.to_string()))?;
    }

    let status = child
        .wait()
        .map_err(|e| ClipboardError::CommandFailed(e.to_string()))?;
    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::CommandFailed(format!(
            "{program} exited with {status}"
        )))
    }
}

/// Mock clipboard capturing writes for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockClipboard {
    written: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn written(&self) -> Vec<String> {
        self.written.borrow().clone()
    }
}

#[cfg(test)]
impl Clipboard for MockClipboard {
    fn write(&self, text: &str) -> Result<(), ClipboardError> {
        self.written.borrow_mut().push(text.to_string());
        Ok(())
    }
}
