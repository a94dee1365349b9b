//! Share-link control path.
//!
//! Branching mirrors the product behavior: a native share target is
//! preferred when one exists; on cancel or failure (or when no target
//! exists at all) the quiz URL is copied to the clipboard and the UI
//! shows a transient confirmation.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use thiserror::Error;

pub const SHARE_TITLE: &str = "Conversation Master";
pub const SHARE_TEXT: &str =
    "Discover the psychology e-books that turn any dull conversation into an effortless date.";

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("native share failed: {0}")]
    Native(String),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

/// A platform share sheet, when the environment provides one.
pub trait NativeShare {
    fn share(&mut self, title: &str, text: &str, url: &str) -> Result<(), ShareError>;
}

/// Destination of the clipboard fallback.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ShareError>;
}

/// How a share attempt ended up delivering the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed off to the native share target.
    Shared,
    /// Copied to the clipboard.
    Copied,
}

/// Share the quiz link.
///
/// Native target available and accepting → `Shared`. Native target
/// cancelling or failing → clipboard copy. No native target →
/// clipboard copy directly. The clipboard is requested lazily, only
/// on the fallback branches, so a host without a clipboard backend
/// can still hand off to its native share target. Errors surface only
/// when the clipboard fallback itself is unavailable.
pub fn share_link<'a, F>(
    native: Option<&mut dyn NativeShare>,
    clipboard: F,
    url: &str,
) -> Result<ShareOutcome, ShareError>
where
    F: FnOnce() -> Result<&'a mut dyn ClipboardSink, ShareError>,
{
    if let Some(target) = native {
        match target.share(SHARE_TITLE, SHARE_TEXT, url) {
            Ok(()) => return Ok(ShareOutcome::Shared),
            Err(err) => tracing::debug!(error = %err, "native share declined, copying instead"),
        }
    }
    clipboard()?.set_text(url)?;
    Ok(ShareOutcome::Copied)
}

/// Native share via an external helper binary. The only terminal
/// environment we know of with a real share sheet is Termux
/// (`termux-share`); everywhere else detection comes back empty and
/// the clipboard path is used.
pub struct CommandShare {
    program: PathBuf,
}

impl CommandShare {
    pub fn detect() -> Option<Self> {
        let path = std::env::var_os("PATH")?;
        std::env::split_paths(&path)
            .map(|dir| dir.join("termux-share"))
            .find(|candidate| candidate.is_file())
            .map(|program| Self { program })
    }
}

impl NativeShare for CommandShare {
    fn share(&mut self, title: &str, text: &str, url: &str) -> Result<(), ShareError> {
        let mut child = Command::new(&self.program)
            .arg("--title")
            .arg(title)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ShareError::Native(e.to_string()))?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin
                .write_all(format!("{text}\n{url}").as_bytes())
                .map_err(|e| ShareError::Native(e.to_string()))?;
        }

        let status = child.wait().map_err(|e| ShareError::Native(e.to_string()))?;
        if status.success() {
            Ok(())
        } else {
            Err(ShareError::Native(format!("exit status {status}")))
        }
    }
}
