//! Loading spinner component

use dioxus::prelude::*;

/// Loading spinner with optional message
#[component]
pub fn LoadingSpinner(
    /// Message to display next to spinner (default: "Loading...")
    #[props(default = "Loading...".to_string())]
    message: String,
) -> Element {
    rsx! {
        div {
            class: "flex justify-center items-center py-12",
            "data-testid": "loading",
            div { class: "animate-spin rounded-full h-10 w-10 border-b-2 border-indigo-500" }
            p { class: "ml-4 text-gray-300", "{message}" }
        }
    }
}
