//! Application layout shell - top bar and content area

use dioxus::prelude::*;

/// Navigation entry for the top bar.
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub is_active: bool,
}

/// Layout view wrapping every page: app title, navigation, content area.
///
/// Navigation is handled via `on_nav_click`, not direct router calls.
#[component]
pub fn AppLayoutView(
    nav_items: Vec<NavItem>,
    on_nav_click: EventHandler<String>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "min-h-screen flex flex-col bg-gray-900 text-white",
            header { class: "border-b border-gray-800 px-6 py-3 flex items-center gap-6",
                span { class: "font-bold text-lg", "Studyhall" }
                nav { class: "flex gap-4",
                    for item in nav_items {
                        NavButton { key: "{item.id}", item: item.clone(), on_click: on_nav_click }
                    }
                }
            }
            main { class: "flex-grow min-h-0 overflow-y-auto", {children} }
        }
    }
}

#[component]
fn NavButton(item: NavItem, on_click: EventHandler<String>) -> Element {
    let id = item.id.clone();
    let class = if item.is_active {
        "text-white font-semibold"
    } else {
        "text-gray-400 hover:text-white transition-colors"
    };

    rsx! {
        button { class, onclick: move |_| on_click.call(id.clone()), "{item.label}" }
    }
}
