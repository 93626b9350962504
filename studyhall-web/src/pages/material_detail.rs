use crate::Route;
use dioxus::prelude::*;
use studyhall_ui::BackButton;

/// Material detail route target.
///
/// The material content endpoint is not part of the classroom API surface
/// yet, so this page only identifies the selected material.
#[component]
pub fn MaterialDetail(material_id: String) -> Element {
    rsx! {
        div { class: "container mx-auto p-6", "data-testid": "material-detail",
            BackButton {
                on_click: move |_| {
                    navigator().push(Route::StudentDashboard {});
                },
            }
            h1 { class: "text-2xl font-bold text-white", "Material {material_id}" }
        }
    }
}
