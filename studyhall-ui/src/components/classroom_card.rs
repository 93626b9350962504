//! Classroom card component - pure view with callbacks

use crate::display_types::Classroom;
use dioxus::prelude::*;

/// Card for a single classroom on the dashboard.
///
/// Pure view component; navigation is handled via the `on_click` callback,
/// not direct router calls.
#[component]
pub fn ClassroomCard(classroom: Classroom, on_click: EventHandler<String>) -> Element {
    let class_id = classroom.id.clone();

    rsx! {
        div {
            class: "bg-gray-800 rounded-lg p-4 shadow-lg hover:bg-gray-700 transition-colors cursor-pointer",
            "data-testid": "classroom-card",
            onclick: move |_| on_click.call(class_id.clone()),
            h3 {
                class: "font-bold text-white text-lg mb-1 truncate",
                title: "{classroom.name}",
                "{classroom.name}"
            }
            p { class: "text-gray-400 text-sm", "{classroom.subject}" }
        }
    }
}
