//! Site header with section navigation.
//!
//! Gains a condensed "scrolled" treatment past 100 px. On narrow
//! widths the links collapse behind a hamburger; choosing a link
//! closes the menu again.

use dioxus::prelude::*;

use crate::components::scroll::scroll_to_section;

/// Section anchors in page order.
const SECTIONS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("gallery", "Gallery"),
    ("skills", "Skills"),
    ("contact", "Contact"),
];

#[component]
pub fn NavHeader(
    /// Whether the page is scrolled past the condensation threshold
    scrolled: bool,
) -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        header {
            class: if scrolled { "site-header scrolled" } else { "site-header" },

            div { class: "header-inner",
                a {
                    class: "brand",
                    onclick: move |_| scroll_to_section("home"),
                    "Pokhara Lens"
                }

                button {
                    class: if menu_open() { "nav-toggle active" } else { "nav-toggle" },
                    "aria-label": "Toggle navigation",
                    onclick: move |_| {
                        let open = menu_open();
                        menu_open.set(!open);
                    },
                    span { class: "nav-toggle-bar" }
                    span { class: "nav-toggle-bar" }
                    span { class: "nav-toggle-bar" }
                }

                nav {
                    class: if menu_open() { "nav-menu active" } else { "nav-menu" },
                    for (id, label) in SECTIONS {
                        a {
                            class: "nav-link",
                            onclick: move |_| {
                                menu_open.set(false);
                                scroll_to_section(id);
                            },
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
