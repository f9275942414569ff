//! The portfolio page.
//!
//! Lays out the sections and mounts the two modal surfaces. While
//! either modal is open the page container gets a class that suspends
//! background scrolling - a presentation concern handled here, not in
//! the navigator.

use dioxus::prelude::*;

use crate::components::scroll::use_scroll_position;
use crate::components::{
    BackToTop, GallerySection, Hero, Lightbox, NavHeader, ShareModal, SkillsSection,
};
use crate::context::use_navigator_state;

/// Scroll depth at which the header condenses.
const HEADER_THRESHOLD: f64 = 100.0;
/// Scroll depth at which the back-to-top button appears.
const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

#[component]
pub fn Portfolio() -> Element {
    let navigator = use_navigator_state();
    let scroll_y = use_scroll_position();

    let modal_open = {
        let nav = navigator.read();
        nav.viewer_open() || nav.share_open()
    };

    rsx! {
        div {
            class: if modal_open { "page modal-open" } else { "page" },

            NavHeader { scrolled: scroll_y() > HEADER_THRESHOLD }

            main {
                Hero {}
                GallerySection {}
                SkillsSection {}
                ContactSection {}
            }

            footer { class: "site-footer",
                p { "\u{00A9} 2026 Pokhara Lens. All photographs are the author's own." }
            }

            BackToTop { visible: scroll_y() > BACK_TO_TOP_THRESHOLD }

            Lightbox {}
            ShareModal {}
        }
    }
}

#[component]
fn ContactSection() -> Element {
    let mut visible = use_signal(|| false);

    rsx! {
        section {
            class: if visible() { "contact-section fade-target visible" } else { "contact-section fade-target" },
            id: "contact",
            onvisible: move |evt| {
                if evt.data().is_intersecting().unwrap_or(false) {
                    visible.set(true);
                }
            },

            h2 { class: "section-title", "Get in Touch" }
            p { class: "section-lede",
                "Prints, licensing and assignment work around Gandaki Province."
            }
            a {
                class: "btn-primary contact-mail",
                href: "mailto:hello@pokharalens.com",
                "hello@pokharalens.com"
            }
        }
    }
}
