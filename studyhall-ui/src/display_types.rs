//! Display types for UI components
//!
//! Lightweight view models mapped field-by-field from API responses. They
//! keep components props-based so views render the same with real or
//! fixture data.

/// Classroom display info
#[derive(Clone, Debug, PartialEq)]
pub struct Classroom {
    pub id: String,
    pub name: String,
    pub subject: String,
}

/// Learning material display info
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub id: String,
    pub title: String,
}
