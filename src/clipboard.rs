//! Clipboard backends for the copy-link action.
//!
//! The primary backend is the system clipboard via arboard; the legacy
//! fallback pipes the text through the platform copy utility, for
//! sessions where the clipboard service is unavailable (common over
//! Wayland/X11 forwarding).

use std::io::Write;
use std::process::{Command, Stdio};

use photofolio_core::{ClipboardBackend, ClipboardError};

/// Primary mechanism: the desktop clipboard service.
#[derive(Default)]
pub struct SystemClipboard;

impl ClipboardBackend for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError(e.to_string()))
    }
}

/// Legacy fallback: pipe the text to the platform copy utility.
#[derive(Default)]
pub struct UtilityClipboard;

impl UtilityClipboard {
    fn candidates() -> &'static [(&'static str, &'static [&'static str])] {
        if cfg!(target_os = "macos") {
            &[("pbcopy", &[])]
        } else if cfg!(target_os = "windows") {
            &[("clip", &[])]
        } else {
            &[("wl-copy", &[]), ("xclip", &["-selection", "clipboard"])]
        }
    }
}

impl ClipboardBackend for UtilityClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        for (program, args) in Self::candidates() {
            let spawned = Command::new(program)
                .args(*args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();

            let mut child = match spawned {
                Ok(child) => child,
                // Utility not installed; try the next one
                Err(_) => continue,
            };

            let write_ok = child
                .stdin
                .as_mut()
                .map(|stdin| stdin.write_all(text.as_bytes()).is_ok())
                .unwrap_or(false);
            drop(child.stdin.take());

            // Always reap the child, even after a failed write
            match child.wait() {
                Ok(status) if write_ok && status.success() => return Ok(()),
                _ => continue,
            }
        }

        Err(ClipboardError(
            "no system copy utility available".to_string(),
        ))
    }
}
