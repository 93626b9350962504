//! View state for pages

use crate::display_types::{Classroom, Material};

/// Loaded state for the class detail view.
///
/// The loading state is the absence of this value: the materials list is
/// never shown before the classroom record is present. Replaced wholesale
/// on refetch.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassDetailState {
    pub classroom: Classroom,
    /// Materials in server response order.
    pub materials: Vec<Material>,
}
