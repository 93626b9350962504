//! Material card component - pure view with callbacks

use crate::display_types::Material;
use dioxus::prelude::*;

/// Card for a single learning material.
#[component]
pub fn MaterialCard(material: Material, on_click: EventHandler<String>) -> Element {
    let material_id = material.id.clone();

    rsx! {
        div {
            class: "bg-gray-800 rounded-lg p-4 shadow-lg hover:bg-gray-700 transition-colors cursor-pointer",
            "data-testid": "material-card",
            onclick: move |_| on_click.call(material_id.clone()),
            h3 {
                class: "font-semibold text-white truncate",
                title: "{material.title}",
                "{material.title}"
            }
        }
    }
}
