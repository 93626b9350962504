//! studyhall-client - REST client for the Studyhall classroom API
//!
//! Contains the typed API client and the session-token provider used by the
//! web app. No UI dependencies; compiles for both native and wasm targets.

pub mod api;
pub mod session;

pub use api::{ApiClient, ApiError, ClientClassroom, ClientMaterial};
pub use session::{BrowserSession, SessionTokens, StaticToken, SESSION_STORAGE_KEY};
