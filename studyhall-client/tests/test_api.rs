//! Fixture-driven decoding tests for the classroom API wire types.

use studyhall_client::{ApiError, ClientClassroom, ClientMaterial};

#[test]
fn decode_classroom_fixture() {
    let json = r#"{"id": "c1", "name": "Algebra I", "subject": "Math"}"#;
    let classroom: ClientClassroom = serde_json::from_str(json).unwrap();

    assert_eq!(classroom.id, "c1");
    assert_eq!(classroom.name, "Algebra I");
    assert_eq!(classroom.subject, "Math");
}

#[test]
fn decode_materials_fixture_in_order() {
    let json = r#"[
        {"id": "m1", "title": "Linear Equations"},
        {"id": "m2", "title": "Graphing"}
    ]"#;
    let materials: Vec<ClientMaterial> = serde_json::from_str(json).unwrap();

    let titles: Vec<&str> = materials.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Linear Equations", "Graphing"]);
    assert_eq!(materials[1].id, "m2");
}

#[test]
fn decode_materials_with_extra_fields_keeps_allow_list_only() {
    let json = r#"[
        {"id": "m1", "title": "Linear Equations", "uploadedBy": "t9", "sizeBytes": 20480}
    ]"#;
    let materials: Vec<ClientMaterial> = serde_json::from_str(json).unwrap();

    assert_eq!(
        materials,
        vec![ClientMaterial {
            id: "m1".into(),
            title: "Linear Equations".into(),
        }]
    );
}

#[test]
fn malformed_body_maps_to_decode_error() {
    let err: ApiError = serde_json::from_str::<ClientClassroom>("<html>502</html>")
        .unwrap_err()
        .into();
    assert!(matches!(err, ApiError::Decode(_)));
}
