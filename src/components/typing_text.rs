//! Typing animation for the hero subtitle.

use std::time::Duration;

use dioxus::prelude::*;

/// Types `text` one character at a time after an initial delay,
/// mirroring the page's typewriter subtitle. Timing is cosmetic; no
/// precision is promised.
#[component]
pub fn TypingText(
    /// The full text to type out
    text: String,
    /// Delay before typing starts, in milliseconds
    #[props(default = 1000)]
    start_delay_ms: u64,
    /// Per-character interval, in milliseconds
    #[props(default = 80)]
    speed_ms: u64,
) -> Element {
    let mut shown = use_signal(String::new);
    let full = text.clone();

    use_effect(move || {
        let full = full.clone();
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(start_delay_ms)).await;
            for end in full.char_indices().map(|(i, c)| i + c.len_utf8()) {
                shown.set(full[..end].to_string());
                tokio::time::sleep(Duration::from_millis(speed_ms)).await;
            }
        });
    });

    rsx! {
        span { class: "typing-text",
            "{shown}"
            span { class: "typing-caret", "aria-hidden": "true" }
        }
    }
}
