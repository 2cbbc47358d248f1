//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the user store, the token issuer, and cookie policy. Nothing in
//! here is mutated per request except through the store's own locking.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;
use crate::services::token::TokenIssuer;
use crate::services::users::UserStore;

/// Attributes applied to the refresh-token cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookieSettings {
    pub secure: bool,
}

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub tokens: Arc<TokenIssuer>,
    pub cookies: CookieSettings,
}

impl AppState {
    #[must_use]
    pub fn new(users: Arc<dyn UserStore>, config: &ServerConfig) -> Self {
        let tokens = TokenIssuer::new(
            &config.tokens.access_secret,
            &config.tokens.refresh_secret,
            Duration::from_secs(config.tokens.access_ttl_secs),
            Duration::from_secs(config.tokens.refresh_ttl_secs),
        );
        Self { users, tokens: Arc::new(tokens), cookies: CookieSettings { secure: config.cookie_secure } }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::services::users::MemoryUserStore;

    pub const TEST_ACCESS_SECRET: &str = "test-access-secret";
    pub const TEST_REFRESH_SECRET: &str = "test-refresh-secret";

    /// Create a test `AppState` backed by an empty in-memory store.
    #[must_use]
    pub fn test_app_state() -> AppState {
        test_app_state_with(Arc::new(MemoryUserStore::new()), false)
    }

    /// Create a test `AppState` around a caller-owned store.
    #[must_use]
    pub fn test_app_state_with(users: Arc<dyn UserStore>, cookie_secure: bool) -> AppState {
        AppState {
            users,
            tokens: Arc::new(TokenIssuer::new(
                TEST_ACCESS_SECRET,
                TEST_REFRESH_SECRET,
                Duration::from_secs(900),
                Duration::from_secs(7 * 24 * 60 * 60),
            )),
            cookies: CookieSettings { secure: cookie_secure },
        }
    }
}
