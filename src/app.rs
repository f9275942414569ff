//! Root application component.
//!
//! Provides global styles, the navigator and toast contexts, and the
//! single portfolio page. The navigator is constructed exactly once
//! here and every component reaches it through context - no ambient
//! globals beyond the CLI-supplied page URL.

use dioxus::prelude::*;
use photofolio_core::{reference_catalog, Navigator};

use crate::components::ToastStack;
use crate::context::Toast;
use crate::pages::Portfolio;
use crate::theme::GLOBAL_STYLES;

#[component]
pub fn App() -> Element {
    let navigator: Signal<Navigator> = use_signal(|| Navigator::new(reference_catalog()));
    let toasts: Signal<Vec<Toast>> = use_signal(Vec::new);

    use_context_provider(|| navigator);
    use_context_provider(|| toasts);

    rsx! {
        style { {GLOBAL_STYLES} }
        Portfolio {}
        ToastStack {}
    }
}
