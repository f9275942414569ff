//! Hero section with the typed subtitle.

use dioxus::prelude::*;

use crate::components::scroll::scroll_to_section;
use crate::components::typing_text::TypingText;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero", id: "home",
            div { class: "hero-shapes", "aria-hidden": "true",
                span { class: "shape shape-1" }
                span { class: "shape shape-2" }
                span { class: "shape shape-3" }
            }

            div { class: "hero-content fade-in-up",
                p { class: "hero-kicker", "Photography from the lap of the Annapurnas" }
                h1 { class: "hero-title", "Pokhara Lens" }
                p { class: "hero-subtitle",
                    TypingText { text: "Chasing light across temples, lakes and mountain trails." }
                }
                button {
                    class: "btn-primary hero-cta",
                    onclick: move |_| scroll_to_section("gallery"),
                    "View the Gallery"
                }
            }
        }
    }
}
