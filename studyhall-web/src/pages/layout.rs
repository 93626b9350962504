use crate::Route;
use dioxus::prelude::*;
use studyhall_ui::{AppLayoutView, NavItem};

#[component]
pub fn AppLayout() -> Element {
    let current_route = use_route::<Route>();

    let nav_items = vec![NavItem {
        id: "dashboard".to_string(),
        label: "Dashboard".to_string(),
        is_active: matches!(
            current_route,
            Route::StudentDashboard {} | Route::ClassDetail { .. } | Route::MaterialDetail { .. }
        ),
    }];

    rsx! {
        AppLayoutView {
            nav_items,
            on_nav_click: move |id: String| {
                if id == "dashboard" {
                    navigator().push(Route::StudentDashboard {});
                }
            },
            Outlet::<Route> {}
        }
    }
}
