//! REST calls against the auth API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): stubs returning the fallback error, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` where the error is already the text to show
//! the user: the server's `message` verbatim, or a generic fallback when the
//! request fails or the body does not parse. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginRequest, LoginResponse, MessageResponse, SignupRequest};

pub const FALLBACK_ERROR: &str = "Something went wrong!";

pub const SIGNUP_PATH: &str = "/auth/signup";
pub const LOGIN_PATH: &str = "/auth/login";
pub const LOGOUT_PATH: &str = "/auth/logout";

/// Extract the user-facing message from an error response body.
#[must_use]
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<MessageResponse>(body)
        .ok()
        .map(|m| m.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_ERROR.to_owned())
}

#[cfg(feature = "csr")]
async fn post_json<T: serde::Serialize>(path: &str, payload: &T) -> Result<String, String> {
    let resp = gloo_net::http::Request::post(path)
        .json(payload)
        .map_err(|e| {
            log::warn!("encode {path} failed: {e}");
            FALLBACK_ERROR.to_owned()
        })?
        .send()
        .await
        .map_err(|e| {
            log::warn!("request {path} failed: {e}");
            FALLBACK_ERROR.to_owned()
        })?;
    let text = resp.text().await.unwrap_or_default();
    if resp.ok() { Ok(text) } else { Err(error_message(&text)) }
}

/// Register a new account via `POST /auth/signup`. Returns the server's
/// confirmation message.
///
/// # Errors
///
/// Returns the message to display if registration fails.
pub async fn signup(req: &SignupRequest) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let body = post_json(SIGNUP_PATH, req).await?;
        Ok(serde_json::from_str::<MessageResponse>(&body).map_or_else(|_| String::new(), |m| m.message))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = req;
        Err(FALLBACK_ERROR.to_owned())
    }
}

/// Sign in via `POST /auth/login`. The refresh token arrives as an HTTP-only
/// cookie the browser keeps; only the access token and user come back here.
///
/// # Errors
///
/// Returns the message to display if login fails.
pub async fn login(req: &LoginRequest) -> Result<LoginResponse, String> {
    #[cfg(feature = "csr")]
    {
        let body = post_json(LOGIN_PATH, req).await?;
        serde_json::from_str::<LoginResponse>(&body).map_err(|e| {
            log::warn!("login response did not parse: {e}");
            FALLBACK_ERROR.to_owned()
        })
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = req;
        Err(FALLBACK_ERROR.to_owned())
    }
}

/// Ask the server to expire the refresh cookie. Failures are ignored; local
/// state is cleared regardless.
pub async fn logout() {
    #[cfg(feature = "csr")]
    {
        if let Err(e) = gloo_net::http::Request::post(LOGOUT_PATH).send().await {
            log::warn!("logout request failed: {e}");
        }
    }
}
