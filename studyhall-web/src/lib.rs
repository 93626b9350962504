pub mod display;
pub mod pages;

use std::sync::Arc;

use dioxus::prelude::*;
use pages::{AppLayout, ClassDetail, MaterialDetail, StudentDashboard};
use studyhall_client::{ApiClient, BrowserSession};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[redirect("/", || Route::StudentDashboard {})]
    #[route("/dashboard/student")]
    StudentDashboard {},
    #[route("/dashboard/student/class/:class_id")]
    ClassDetail { class_id: String },
    #[route("/dashboard/student/material/:material_id")]
    MaterialDetail { material_id: String },
}

#[component]
pub fn App() -> Element {
    // Same-origin API; the bearer token comes from browser local storage,
    // resolved by the client once per request.
    use_context_provider(|| ApiClient::new("", Arc::new(BrowserSession)));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
