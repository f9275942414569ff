//! The image viewer modal.
//!
//! Renders only while the navigator's viewer automaton is open. Escape
//! or a backdrop click closes it; the arrow keys and the edge buttons
//! step through the catalog, clamped at both ends. Clicks inside the
//! frame are swallowed so they never reach the backdrop-close handler.

use dioxus::prelude::*;
use photofolio_core::Direction;

use crate::context::use_navigator_state;

#[component]
pub fn Lightbox() -> Element {
    let mut navigator = use_navigator_state();

    let (record, can_prev, can_next) = {
        let nav = navigator.read();
        if !nav.viewer_open() {
            return rsx! {};
        }
        let record = match nav.current_record() {
            Ok(record) => record.clone(),
            Err(e) => {
                tracing::error!("viewer open on invalid index: {e}");
                return rsx! {};
            }
        };
        (record, nav.can_go_previous(), nav.can_go_next())
    };

    let on_keydown = move |evt: KeyboardEvent| match evt.key() {
        Key::Escape => navigator.write().close_viewer(),
        Key::ArrowLeft => navigator.write().navigate(Direction::Previous),
        Key::ArrowRight => navigator.write().navigate(Direction::Next),
        _ => {}
    };

    rsx! {
        div {
            class: "modal-overlay lightbox-overlay",
            tabindex: "0",
            onclick: move |_| navigator.write().close_viewer(),
            onkeydown: on_keydown,
            onmounted: move |evt| {
                spawn(async move {
                    let _ = evt.data().set_focus(true).await;
                });
            },

            div {
                class: "lightbox-container",
                onclick: move |evt| evt.stop_propagation(),

                button {
                    class: "modal-close-btn",
                    "aria-label": "Close viewer",
                    onclick: move |_| navigator.write().close_viewer(),
                    "\u{00D7}"
                }

                button {
                    class: "lightbox-nav lightbox-prev",
                    "aria-label": "Previous photo",
                    disabled: !can_prev,
                    onclick: move |_| navigator.write().navigate(Direction::Previous),
                    "\u{2039}"
                }

                figure { class: "lightbox-figure",
                    img {
                        class: "lightbox-image",
                        src: "{record.image_ref}",
                        alt: "{record.title}",
                    }
                    figcaption { class: "lightbox-caption",
                        h3 { class: "lightbox-title", "{record.title}" }
                        p { class: "lightbox-description", "{record.description}" }
                    }
                }

                button {
                    class: "lightbox-nav lightbox-next",
                    "aria-label": "Next photo",
                    disabled: !can_next,
                    onclick: move |_| navigator.write().navigate(Direction::Next),
                    "\u{203A}"
                }
            }
        }
    }
}
