//! Wire types shared with the auth API.
//!
//! DESIGN
//! ======
//! Field names follow the server's camelCase JSON. `User` is also the shape
//! persisted under the `user` storage key, so it must round-trip through
//! serde without loss.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Public profile of the signed-in user. Never carries a password.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl User {
    /// Name shown in the dashboard greeting.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() { self.email.clone() } else { full.to_owned() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful `POST /auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub access_token: String,
    pub user: User,
}

/// Body of every other auth response, success or failure.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
