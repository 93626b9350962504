use crate::display;
use crate::Route;
use dioxus::prelude::*;
use studyhall_client::ApiClient;
use studyhall_ui::{ClassroomCard, ErrorDisplay, LoadingSpinner};

#[component]
pub fn StudentDashboard() -> Element {
    let api: ApiClient = use_context();
    let data = use_resource(move || {
        let api = api.clone();
        async move { api.get_classrooms().await }
    });
    let read = data.read();

    let result = match &*read {
        Some(Ok(classrooms)) => Ok(classrooms.clone()),
        Some(Err(e)) => Err(e.to_string()),
        None => {
            return rsx! {
                LoadingSpinner {}
            };
        }
    };
    drop(read);

    match result {
        Ok(classrooms) => {
            let classrooms: Vec<_> = classrooms.into_iter().map(display::classroom).collect();

            rsx! {
                div { class: "container mx-auto p-6", "data-testid": "student-dashboard",
                    h1 { class: "text-3xl font-bold text-white mb-6", "My Classes" }
                    if classrooms.is_empty() {
                        p { class: "text-gray-400", "You are not enrolled in any classes yet." }
                    } else {
                        div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                            for classroom in classrooms {
                                ClassroomCard {
                                    key: "{classroom.id}",
                                    classroom: classroom.clone(),
                                    on_click: move |class_id: String| {
                                        navigator().push(Route::ClassDetail { class_id });
                                    },
                                }
                            }
                        }
                    }
                }
            }
        }
        Err(e) => {
            rsx! {
                div { class: "container mx-auto p-6",
                    ErrorDisplay { message: format!("Failed to load classes: {e}") }
                }
            }
        }
    }
}
