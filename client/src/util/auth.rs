//! Shared route-gating helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected and guest-only routes must apply identical redirect behavior.
//! The decisions themselves are plain functions over `AuthState`; the Leptos
//! glue only wires them to navigation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_ROUTE: &str = "/login";
pub const SIGNUP_ROUTE: &str = "/signup";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Whether a protected view may render. Checks token presence only.
#[must_use]
pub fn can_enter_protected(state: &AuthState) -> bool {
    state.is_authenticated()
}

/// Whether a guest-only view (login, signup) should bounce to the dashboard.
#[must_use]
pub fn should_redirect_guest(state: &AuthState) -> bool {
    state.is_authenticated()
}

/// Where a guest-only view should send this visitor, if anywhere. `hold`
/// suppresses the redirect: during the post-login splash, and on the login
/// view rendered for unknown paths.
#[must_use]
pub fn guest_redirect_target(state: &AuthState, hold: bool) -> Option<&'static str> {
    (!hold && should_redirect_guest(state)).then_some(DASHBOARD_ROUTE)
}

/// Send a signed-in visitor away from a guest-only page, now and whenever
/// auth state changes.
pub fn install_guest_redirect<H, F>(auth: RwSignal<AuthState>, hold: H, navigate: F)
where
    H: Fn() -> bool + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let hold = hold();
        if let Some(target) = auth.with(|state| guest_redirect_target(state, hold)) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
