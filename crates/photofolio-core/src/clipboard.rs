//! Copy-link support: a primary clipboard write with one legacy fallback.
//!
//! The chain never surfaces an error to the caller - the terminal
//! outcome is reported to the user as a transient toast, and the action
//! can simply be triggered again.

use thiserror::Error;

/// A failed clipboard write. Environmental, not a bug: the system
/// clipboard may be unavailable or access denied.
#[derive(Error, Debug, Clone)]
#[error("clipboard write failed: {0}")]
pub struct ClipboardError(pub String);

/// Something that can place text on the system clipboard.
pub trait ClipboardBackend {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Terminal result of a copy attempt, after the fallback chain ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

impl CopyOutcome {
    /// The toast text shown for this outcome.
    pub fn message(self) -> &'static str {
        match self {
            CopyOutcome::Copied => "Link copied to clipboard!",
            CopyOutcome::Failed => "Failed to copy link",
        }
    }
}

/// Try the primary backend; on failure make exactly one fallback
/// attempt. Successive calls are independent - the operation is
/// stateless and idempotent, so no coordination is needed between
/// overlapping attempts.
pub fn copy_with_fallback(
    primary: &mut dyn ClipboardBackend,
    fallback: &mut dyn ClipboardBackend,
    text: &str,
) -> CopyOutcome {
    match primary.write_text(text) {
        Ok(()) => CopyOutcome::Copied,
        Err(primary_err) => {
            tracing::warn!("primary clipboard write failed: {primary_err}, trying fallback");
            match fallback.write_text(text) {
                Ok(()) => CopyOutcome::Copied,
                Err(fallback_err) => {
                    tracing::warn!("fallback clipboard write failed: {fallback_err}");
                    CopyOutcome::Failed
                }
            }
        }
    }
}
