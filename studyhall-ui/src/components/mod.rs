//! Pure view components

mod app_layout;
mod class_detail;
mod classroom_card;
mod helpers;

pub use app_layout::{AppLayoutView, NavItem};
pub use class_detail::ClassDetailView;
pub use classroom_card::ClassroomCard;
pub use helpers::{BackButton, ErrorDisplay, LoadingSpinner};
