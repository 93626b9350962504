//! Error display component

use dioxus::prelude::*;

/// Inline error box for page-level load failures
#[component]
pub fn ErrorDisplay(message: String) -> Element {
    rsx! {
        div {
            class: "bg-red-900 border border-red-800 text-red-200 px-4 py-3 rounded-lg mb-6",
            "data-testid": "error",
            p { "{message}" }
        }
    }
}
