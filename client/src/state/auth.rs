//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and user-aware pages read this to decide what to render. The
//! pair `{token, user}` is mirrored to durable storage under the keys `token`
//! and `user` and reloaded at startup.
//!
//! DESIGN
//! ======
//! Storage is a port (`AuthStorage`) so the state logic runs natively in tests
//! against `MemoryStorage` and in the browser against `LocalStorage`.
//! `AuthContext` is provided through Leptos context rather than living in a
//! global; writes go to storage first, then land in one signal update.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::*;

use crate::net::types::User;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Durable string key/value storage.
pub trait AuthStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// Process-local storage. Used in tests and when the browser refuses
/// `localStorage` (private mode, sandboxed frames).
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl AuthStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&self, key: &str) {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
    }
}

/// Browser `window.localStorage`. Each call resolves the storage handle
/// afresh; failures read as absent, and failed writes are logged and dropped.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
impl LocalStorage {
    fn handle() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }

    /// True when the browser exposes a usable `localStorage`.
    #[must_use]
    pub fn available() -> bool {
        Self::handle().is_some()
    }
}

#[cfg(feature = "csr")]
impl AuthStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::handle()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        report_storage_write("write", key, Self::handle().map(|s| s.set_item(key, value)));
    }

    fn remove_item(&self, key: &str) {
        report_storage_write("remove", key, Self::handle().map(|s| s.remove_item(key)));
    }
}

/// Log a storage write that did not land. `None` means no storage handle was
/// available. Returns whether the write succeeded.
#[cfg(any(test, feature = "csr"))]
fn report_storage_write<E: std::fmt::Debug>(op: &str, key: &str, outcome: Option<Result<(), E>>) -> bool {
    match outcome {
        Some(Ok(())) => true,
        Some(Err(e)) => {
            log::warn!("localStorage {op} of {key} failed: {e:?}");
            false
        }
        None => {
            log::warn!("localStorage unavailable; {op} of {key} dropped");
            false
        }
    }
}

/// The signed-in session as the client sees it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl AuthState {
    /// Read the persisted session. An empty token or a `user` entry that does
    /// not parse is treated as absent.
    #[must_use]
    pub fn load(storage: &dyn AuthStorage) -> Self {
        let token = storage.get_item(TOKEN_KEY).filter(|t| !t.is_empty());
        let user = storage
            .get_item(USER_KEY)
            .and_then(|raw| serde_json::from_str::<User>(&raw).ok());
        Self { token, user }
    }

    /// Persist and adopt a new session.
    pub fn set_auth(&mut self, storage: &dyn AuthStorage, token: String, user: User) {
        storage.set_item(TOKEN_KEY, &token);
        match serde_json::to_string(&user) {
            Ok(raw) => storage.set_item(USER_KEY, &raw),
            Err(_) => storage.remove_item(USER_KEY),
        }
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Forget the session in memory and in storage.
    pub fn logout(&mut self, storage: &dyn AuthStorage) {
        storage.remove_item(TOKEN_KEY);
        storage.remove_item(USER_KEY);
        self.token = None;
        self.user = None;
    }

    /// Token presence only. Validity is the server's concern.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Auth state plus the storage it is mirrored to, shared through context.
#[derive(Clone)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
    pub storage: Arc<dyn AuthStorage>,
}

impl AuthContext {
    /// Build a context seeded from whatever `storage` already holds.
    #[must_use]
    pub fn new(storage: Arc<dyn AuthStorage>) -> Self {
        let state = RwSignal::new(AuthState::load(storage.as_ref()));
        Self { state, storage }
    }

    pub fn set_auth(&self, token: String, user: User) {
        let mut next = self.state.get_untracked();
        next.set_auth(self.storage.as_ref(), token, user);
        self.state.set(next);
    }

    pub fn logout(&self) {
        let mut next = self.state.get_untracked();
        next.logout(self.storage.as_ref());
        self.state.set(next);
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }
}

/// Fetch the `AuthContext` provided by the root component.
///
/// # Panics
///
/// Panics if called outside the component tree under `App`.
#[must_use]
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
