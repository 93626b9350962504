//! studyhall-ui - Shared UI types and components for Studyhall
//!
//! Contains display types, view state, and pure view components used by the
//! web app. Components take props and callbacks only; no network access.

pub mod components;
pub mod display_types;
pub mod state;

pub use components::*;
pub use display_types::*;
pub use state::ClassDetailState;
