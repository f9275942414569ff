//! Scroll plumbing between the webview and the component tree.
//!
//! The webview owns the real scroll position, so a small eval bridge
//! streams it into a signal; the header, back-to-top button and
//! section links all read from or write through here.

use dioxus::document;
use dioxus::prelude::*;

/// Streams the webview's vertical scroll offset into a signal.
///
/// One listener per call site; the page installs it once and passes the
/// signal down to whoever styles off it.
pub fn use_scroll_position() -> Signal<f64> {
    let mut position = use_signal(|| 0.0_f64);

    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval(
                r#"
                window.addEventListener('scroll', () => {
                    dioxus.send(window.scrollY);
                }, { passive: true });
                dioxus.send(window.scrollY);
                "#,
            );

            while let Ok(offset) = eval.recv::<f64>().await {
                position.set(offset);
            }
        });
    });

    position
}

/// Smooth-scroll back to the top of the page.
pub fn scroll_to_top() {
    let _ = document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
}

/// Smooth-scroll a section into view by element id.
pub fn scroll_to_section(id: &str) {
    let _ = document::eval(&format!(
        "const el = document.getElementById('{id}'); \
         if (el) el.scrollIntoView({{ behavior: 'smooth', block: 'start' }});"
    ));
}
