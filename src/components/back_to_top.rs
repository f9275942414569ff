//! Back-to-top button, visible past the scroll threshold.

use dioxus::prelude::*;

use crate::components::scroll::scroll_to_top;

#[component]
pub fn BackToTop(
    /// Whether the page is scrolled far enough to show the button
    visible: bool,
) -> Element {
    rsx! {
        button {
            class: if visible { "back-to-top visible" } else { "back-to-top" },
            "aria-label": "Back to top",
            onclick: move |_| scroll_to_top(),
            "\u{2191}"
        }
    }
}
