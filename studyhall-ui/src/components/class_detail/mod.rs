//! Class detail view components

mod material_card;
mod view;

pub use view::ClassDetailView;
