//! Transient notification stack.

use dioxus::prelude::*;

use crate::context::use_toasts;

/// Renders every live toast. Lifetimes are driven by `push_toast`;
/// this component just mirrors the stack.
#[component]
pub fn ToastStack() -> Element {
    let toasts = use_toasts();

    rsx! {
        div { class: "toast-stack", "aria-live": "polite",
            for toast in toasts.read().iter() {
                div {
                    key: "{toast.id}",
                    class: if toast.fading { "toast fading" } else { "toast" },
                    "{toast.message}"
                }
            }
        }
    }
}
