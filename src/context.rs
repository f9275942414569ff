//! Shared context for the portfolio app.
//!
//! Provides the navigator and the toast stack to all components via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! let mut navigator = use_navigator_state();
//! navigator.write().open_viewer(index)?;
//!
//! let toasts = use_toasts();
//! push_toast(toasts, "Link copied to clipboard!");
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use dioxus::prelude::*;
use photofolio_core::Navigator;

/// How long a toast stays fully visible before it fades.
const TOAST_VISIBLE: Duration = Duration::from_secs(3);
/// Extra time for the fade-out transition before removal.
const TOAST_FADE: Duration = Duration::from_millis(300);

/// Hook to access the navigator from context.
///
/// Named to avoid clashing with dioxus-router's `use_navigator`.
pub fn use_navigator_state() -> Signal<Navigator> {
    use_context::<Signal<Navigator>>()
}

/// Get the public page URL supplied on the command line.
pub fn page_url() -> String {
    crate::get_page_url()
}

/// A transient notification. Each toast owns an independent removal
/// timer; overlapping toasts simply coexist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    /// Set just before removal so the CSS fade can play.
    pub fading: bool,
}

/// Hook to access the toast stack from context.
pub fn use_toasts() -> Signal<Vec<Toast>> {
    use_context::<Signal<Vec<Toast>>>()
}

/// Show a toast: appear, stay visible for ~3 s, fade, then be removed.
pub fn push_toast(mut toasts: Signal<Vec<Toast>>, message: impl Into<String>) {
    static NEXT_ID: AtomicU64 = AtomicU64::new(0);
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);

    toasts.write().push(Toast {
        id,
        message: message.into(),
        fading: false,
    });

    spawn(async move {
        tokio::time::sleep(TOAST_VISIBLE).await;
        if let Some(toast) = toasts.write().iter_mut().find(|t| t.id == id) {
            toast.fading = true;
        }
        tokio::time::sleep(TOAST_FADE).await;
        toasts.write().retain(|t| t.id != id);
    });
}
