use crate::display;
use crate::Route;
use dioxus::prelude::*;
use futures::join;
use studyhall_client::{ApiClient, ApiError, ClientClassroom, ClientMaterial};
use studyhall_ui::{ClassDetailState, ClassDetailView, LoadingSpinner};

/// Combine the two fetch results into view state.
///
/// Classroom failure leaves the view in its loading state (`None`), even
/// when the materials fetch succeeded; materials failure falls back to the
/// pre-fetch empty list. Both failures are logged only.
fn aggregate_class_detail(
    class_id: &str,
    classroom: Result<ClientClassroom, ApiError>,
    materials: Result<Vec<ClientMaterial>, ApiError>,
) -> Option<ClassDetailState> {
    let classroom = match classroom {
        Ok(c) => display::classroom(c),
        Err(e) => {
            tracing::error!("failed to load classroom {class_id}: {e}");
            return None;
        }
    };

    let materials = match materials {
        Ok(m) => m.into_iter().map(display::material).collect(),
        Err(e) => {
            tracing::error!("failed to load materials for classroom {class_id}: {e}");
            Vec::new()
        }
    };

    Some(ClassDetailState {
        classroom,
        materials,
    })
}

/// Fetch the classroom record and its materials together.
///
/// Both requests are issued without ordering dependency and joined before
/// any state transition.
async fn load_class_detail(api: ApiClient, class_id: String) -> Option<ClassDetailState> {
    let (classroom, materials) = join!(api.get_classroom(&class_id), api.get_materials(&class_id));
    aggregate_class_detail(&class_id, classroom, materials)
}

#[component]
pub fn ClassDetail(class_id: String) -> Element {
    let api: ApiClient = use_context();
    let id = class_id.clone();
    // Rerunning on an id change (or unmounting) drops the in-flight future,
    // so a stale response can never overwrite newer state.
    let data = use_resource(move || {
        let api = api.clone();
        let id = id.clone();
        async move { load_class_detail(api, id).await }
    });
    let read = data.read();

    let state = match &*read {
        Some(Some(state)) => state.clone(),
        // Still fetching, or the classroom fetch failed: loading indicator
        // only, even if materials already arrived.
        _ => {
            return rsx! {
                LoadingSpinner {}
            };
        }
    };
    drop(read);

    rsx! {
        ClassDetailView {
            classroom: state.classroom,
            materials: state.materials,
            on_material_click: move |material_id: String| {
                navigator().push(Route::MaterialDetail { material_id });
            },
            on_back: move |_| {
                navigator().push(Route::StudentDashboard {});
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classroom_fixture() -> ClientClassroom {
        ClientClassroom {
            id: "c1".into(),
            name: "Algebra I".into(),
            subject: "Math".into(),
        }
    }

    fn materials_fixture() -> Vec<ClientMaterial> {
        vec![
            ClientMaterial {
                id: "m1".into(),
                title: "Linear Equations".into(),
            },
            ClientMaterial {
                id: "m2".into(),
                title: "Graphing".into(),
            },
        ]
    }

    #[test]
    fn both_fetches_succeed_populates_view_state() {
        let state =
            aggregate_class_detail("c1", Ok(classroom_fixture()), Ok(materials_fixture())).unwrap();

        assert_eq!(state.classroom.name, "Algebra I");
        assert_eq!(state.classroom.subject, "Math");
        let titles: Vec<&str> = state.materials.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Linear Equations", "Graphing"]);
    }

    #[test]
    fn classroom_failure_keeps_the_view_loading_even_with_materials() {
        let state =
            aggregate_class_detail("c1", Err(ApiError::MissingToken), Ok(materials_fixture()));
        assert_eq!(state, None);
    }

    #[test]
    fn materials_failure_falls_back_to_empty_list() {
        let state =
            aggregate_class_detail("c1", Ok(classroom_fixture()), Err(ApiError::MissingToken))
                .unwrap();

        assert_eq!(state.classroom.id, "c1");
        assert!(state.materials.is_empty());
    }

    #[test]
    fn both_failures_keep_the_view_loading() {
        let state = aggregate_class_detail(
            "c1",
            Err(ApiError::MissingToken),
            Err(ApiError::MissingToken),
        );
        assert_eq!(state, None);
    }

    #[test]
    fn empty_materials_list_is_preserved_not_treated_as_failure() {
        let state = aggregate_class_detail("c1", Ok(classroom_fixture()), Ok(Vec::new())).unwrap();
        assert!(state.materials.is_empty());
    }
}
