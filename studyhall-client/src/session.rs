//! Session token lookup for authenticated API calls.

/// Fixed browser storage key holding the bearer session token.
pub const SESSION_STORAGE_KEY: &str = "studyhall_session_token";

/// Source of the current session's bearer token.
///
/// The API client resolves the token through this trait once per request,
/// at call time. There is no refresh logic; a session either exists or it
/// doesn't.
pub trait SessionTokens {
    /// The current bearer token, if a session exists.
    fn token(&self) -> Option<String>;
}

/// Token provider backed by the browser's persistent local storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserSession;

impl SessionTokens for BrowserSession {
    #[cfg(target_arch = "wasm32")]
    fn token(&self) -> Option<String> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(SESSION_STORAGE_KEY).ok().flatten())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn token(&self) -> Option<String> {
        None
    }
}

/// Fixed-token provider for tests and tooling.
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

impl SessionTokens for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_token_yields_its_token() {
        let session = StaticToken("tok-abc".into());
        assert_eq!(session.token(), Some("tok-abc".to_string()));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn browser_session_has_no_token_outside_the_browser() {
        assert_eq!(BrowserSession.token(), None);
    }
}
