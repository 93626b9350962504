//! Class detail view - main component

use super::material_card::MaterialCard;
use crate::components::BackButton;
use crate::display_types::{Classroom, Material};
use dioxus::prelude::*;

/// Class detail view component
///
/// Renders the classroom header and the materials section. Only mounted
/// once the classroom record is present; the caller owns the loading state.
#[component]
pub fn ClassDetailView(
    classroom: Classroom,
    /// Materials in server response order
    materials: Vec<Material>,
    on_material_click: EventHandler<String>,
    on_back: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "container mx-auto p-6", "data-testid": "class-detail",
            BackButton {
                text: "Back to Dashboard",
                on_click: move |_| on_back.call(()),
            }
            header { class: "mb-8",
                h1 { class: "text-3xl font-bold text-white mb-1", "{classroom.name}" }
                p { class: "text-gray-400", "Subject: {classroom.subject}" }
            }
            MaterialsSection { materials, on_material_click }
        }
    }
}

/// Materials section - grid of cards, or an explicit empty placeholder.
#[component]
fn MaterialsSection(materials: Vec<Material>, on_material_click: EventHandler<String>) -> Element {
    if materials.is_empty() {
        return rsx! {
            div {
                class: "text-center py-12 text-gray-400",
                "data-testid": "no-materials",
                p { "No learning materials available." }
            }
        };
    }

    rsx! {
        div {
            class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
            "data-testid": "materials-grid",
            for material in materials {
                MaterialCard {
                    key: "{material.id}",
                    material: material.clone(),
                    on_click: on_material_click,
                }
            }
        }
    }
}
