//! Portfolio gallery grid.
//!
//! Each card closes over its own catalog index at render time, so the
//! view/share buttons never have to rediscover which photo they belong
//! to from the DOM.

use dioxus::prelude::*;
use photofolio_core::PhotoRecord;

use crate::context::{self, use_navigator_state};

#[component]
pub fn GallerySection() -> Element {
    let navigator = use_navigator_state();
    let records: Vec<PhotoRecord> = navigator.read().catalog().iter().cloned().collect();

    rsx! {
        section { class: "gallery-section", id: "gallery",
            h2 { class: "section-title", "Gallery" }
            p { class: "section-lede", "Six frames from in and around the Pokhara valley." }

            div { class: "gallery-grid",
                for (index, record) in records.into_iter().enumerate() {
                    GalleryCard { index, record }
                }
            }
        }
    }
}

#[component]
fn GalleryCard(index: usize, record: PhotoRecord) -> Element {
    let mut navigator = use_navigator_state();
    let mut visible = use_signal(|| false);

    rsx! {
        article {
            class: if visible() { "gallery-card fade-target visible" } else { "gallery-card fade-target" },
            onvisible: move |evt| {
                if evt.data().is_intersecting().unwrap_or(false) {
                    visible.set(true);
                }
            },

            img {
                class: "gallery-image",
                src: "{record.image_ref}",
                alt: "{record.title}",
                loading: "lazy",
            }

            div { class: "gallery-overlay",
                div { class: "gallery-caption",
                    h3 { "{record.title}" }
                    p { "{record.description}" }
                }
                div { class: "gallery-actions",
                    button {
                        class: "card-btn view-btn",
                        "aria-label": "View {record.title}",
                        onclick: move |_| {
                            if let Err(e) = navigator.write().open_viewer(index) {
                                tracing::error!("view button wired to stale index: {e}");
                                debug_assert!(false, "stale gallery index {index}");
                            }
                        },
                        "View"
                    }
                    button {
                        class: "card-btn share-btn",
                        "aria-label": "Share {record.title}",
                        onclick: move |_| {
                            let url = context::page_url();
                            if let Err(e) = navigator.write().open_share_panel(index, url) {
                                tracing::error!("share button wired to stale index: {e}");
                                debug_assert!(false, "stale gallery index {index}");
                            }
                        },
                        "Share"
                    }
                }
            }
        }
    }
}
