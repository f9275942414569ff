//! Skills section with animated proficiency bars.
//!
//! Bars stay empty until the section scrolls into view, then fill to
//! their percentage via a CSS width transition.

use dioxus::prelude::*;

const SKILLS: [(&str, u8); 4] = [
    ("Landscape Photography", 95),
    ("Night & Long Exposure", 85),
    ("Photo Editing", 80),
    ("Drone Photography", 70),
];

#[component]
pub fn SkillsSection() -> Element {
    let mut filled = use_signal(|| false);

    rsx! {
        section {
            class: "skills-section",
            id: "skills",
            onvisible: move |evt| {
                if evt.data().is_intersecting().unwrap_or(false) {
                    filled.set(true);
                }
            },

            h2 { class: "section-title", "Skills" }

            div { class: "skills-grid",
                for (name, percent) in SKILLS {
                    div { class: "skill-item",
                        div { class: "skill-label",
                            span { "{name}" }
                            span { class: "skill-percent", "{percent}%" }
                        }
                        div { class: "skill-track",
                            div {
                                class: "skill-progress",
                                style: if filled() {
                                    format!("width: {percent}%;")
                                } else {
                                    "width: 0;".to_string()
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
