//! Field-by-field mapping from API wire types to display types.
//!
//! The allow-list is explicit: only the fields named here reach the views.

use studyhall_client::{ClientClassroom, ClientMaterial};
use studyhall_ui::{Classroom, Material};

pub fn classroom(c: ClientClassroom) -> Classroom {
    Classroom {
        id: c.id,
        name: c.name,
        subject: c.subject,
    }
}

pub fn material(m: ClientMaterial) -> Material {
    Material {
        id: m.id,
        title: m.title,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classroom_maps_all_display_fields() {
        let mapped = classroom(ClientClassroom {
            id: "c1".into(),
            name: "Algebra I".into(),
            subject: "Math".into(),
        });

        assert_eq!(mapped.id, "c1");
        assert_eq!(mapped.name, "Algebra I");
        assert_eq!(mapped.subject, "Math");
    }

    #[test]
    fn materials_map_in_order() {
        let wire = vec![
            ClientMaterial {
                id: "m1".into(),
                title: "Linear Equations".into(),
            },
            ClientMaterial {
                id: "m2".into(),
                title: "Graphing".into(),
            },
        ];

        let mapped: Vec<Material> = wire.into_iter().map(material).collect();
        let titles: Vec<&str> = mapped.iter().map(|m| m.title.as_str()).collect();

        assert_eq!(titles, vec!["Linear Equations", "Graphing"]);
        assert_eq!(mapped[1].id, "m2");
    }
}
