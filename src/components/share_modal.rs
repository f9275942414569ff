//! The share panel modal.
//!
//! Offers the five outbound targets plus a copy-link action. Launching
//! a target opens the system browser and closes the panel, as the page
//! always did. Copy-link runs the primary/fallback clipboard chain and
//! reports its outcome only as a toast.

use dioxus::prelude::*;
use photofolio_core::{copy_with_fallback, CopyOutcome, ShareTarget};

use crate::clipboard::{SystemClipboard, UtilityClipboard};
use crate::context::{self, push_toast, use_navigator_state, use_toasts};

#[component]
pub fn ShareModal() -> Element {
    let mut navigator = use_navigator_state();
    let toasts = use_toasts();

    let title = {
        let nav = navigator.read();
        if !nav.share_open() {
            return rsx! {};
        }
        nav.share_context()
            .map(|ctx| ctx.title.clone())
            .unwrap_or_default()
    };

    let mut open_target = move |target: ShareTarget| {
        let url = match navigator.read().share_target_url(target) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("share link requested without context: {e}");
                debug_assert!(false, "share panel rendered without a context");
                return;
            }
        };

        if let Err(e) = webbrowser::open(&url) {
            tracing::warn!("could not open browser for {}: {e}", target.label());
        }
        navigator.write().close_share_panel();
    };

    let copy_page_link = move |_| {
        let url = context::page_url();
        // Single-shot attempt; overlapping attempts are independent
        spawn(async move {
            let mut primary = SystemClipboard;
            let mut fallback = UtilityClipboard;
            let outcome = copy_with_fallback(&mut primary, &mut fallback, &url);
            if outcome == CopyOutcome::Failed {
                tracing::warn!("copy-link failed through both mechanisms");
            }
            push_toast(toasts, outcome.message());
        });
    };

    rsx! {
        div {
            class: "modal-overlay share-overlay",
            tabindex: "0",
            onclick: move |_| navigator.write().close_share_panel(),
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    navigator.write().close_share_panel();
                }
            },
            onmounted: move |evt| {
                spawn(async move {
                    let _ = evt.data().set_focus(true).await;
                });
            },

            div {
                class: "share-container",
                onclick: move |evt| evt.stop_propagation(),

                header { class: "share-header",
                    h2 { class: "share-title", "Share \"{title}\"" }
                    button {
                        class: "modal-close-btn",
                        "aria-label": "Close share panel",
                        onclick: move |_| navigator.write().close_share_panel(),
                        "\u{00D7}"
                    }
                }

                div { class: "share-options",
                    for target in ShareTarget::ALL {
                        button {
                            class: "share-option share-{target.slug()}",
                            onclick: move |_| open_target(target),
                            "{target.label()}"
                        }
                    }
                }

                button {
                    class: "btn-primary copy-link-btn",
                    onclick: copy_page_link,
                    "Copy Link"
                }
            }
        }
    }
}
