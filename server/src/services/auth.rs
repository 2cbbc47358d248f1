//! Credential flow: registration, login, access-token refresh.
//!
//! ARCHITECTURE
//! ============
//! Route handlers translate HTTP to these calls and map [`AuthError`] back to
//! status codes. Everything here is storage-agnostic via [`UserStore`].
//!
//! TRADE-OFFS
//! ==========
//! Login failures collapse to one `InvalidCredentials` variant so responses do
//! not reveal whether an email is registered. No rate limiting or lockout is
//! applied; brute-force protection is out of scope.

use serde::Deserialize;

/// Argon2id hash matching no real password, verified when the email is
/// unknown so both login failures cost one full Argon2 verify.
pub(crate) const UNKNOWN_USER_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$kh4RpKMYXq6oRkzpZnqUGw$aPg38blIrcVlG2wt5eje/6h2Qz+lrKpp6YS9hG1XCT8";

use super::password;
use super::token::TokenIssuer;
use super::users::{NewUser, PublicUser, StoreError, UserStore};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login: both tokens plus the sanitized user.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub access_token: String,
    pub refresh_token: String,
    pub user: PublicUser,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("user already exists")]
    Conflict,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("invalid refresh token")]
    InvalidRefreshToken,
    #[error("token issuance failed: {0}")]
    TokenIssue(#[from] super::token::TokenError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => Self::Conflict,
            StoreError::Db(e) => Self::Internal(e.to_string()),
        }
    }
}

/// Hash a password off the async runtime; Argon2 is CPU-bound.
async fn hash_blocking(plain: String) -> Result<String, AuthError> {
    tokio::task::spawn_blocking(move || password::hash_password(&plain))
        .await
        .map_err(|e| AuthError::Internal(e.to_string()))?
        .map_err(|e| AuthError::Internal(e.to_string()))
}

async fn verify_blocking(hash: String, plain: String) -> Result<bool, AuthError> {
    tokio::task::spawn_blocking(move || password::verify_password(&hash, &plain))
        .await
        .map_err(|e| AuthError::Internal(e.to_string()))
}

/// Register a new user. The hash is computed before anything is written.
///
/// # Errors
///
/// [`AuthError::Conflict`] if the email is taken (by pre-check or by the store's
/// uniqueness constraint), [`AuthError::Internal`] on hashing or storage failure.
pub async fn register(store: &dyn UserStore, req: SignupRequest) -> Result<PublicUser, AuthError> {
    if store.find_by_email(&req.email).await?.is_some() {
        return Err(AuthError::Conflict);
    }

    let password_hash = hash_blocking(req.password).await?;
    let user = store
        .insert(NewUser {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password_hash,
        })
        .await?;

    tracing::info!(user_id = %user.id, "user registered");
    Ok(PublicUser::from(&user))
}

/// Verify credentials and issue an access/refresh token pair.
///
/// # Errors
///
/// [`AuthError::InvalidCredentials`] for an unknown email or wrong password,
/// [`AuthError::TokenIssue`] if signing fails, [`AuthError::Internal`] on storage failure.
pub async fn login(store: &dyn UserStore, tokens: &TokenIssuer, req: LoginRequest) -> Result<LoginOutcome, AuthError> {
    let Some(user) = store.find_by_email(&req.email).await? else {
        verify_blocking(UNKNOWN_USER_HASH.to_owned(), req.password).await?;
        return Err(AuthError::InvalidCredentials);
    };

    if !verify_blocking(user.password_hash.clone(), req.password).await? {
        return Err(AuthError::InvalidCredentials);
    }

    let access_token = tokens.issue_access(user.id, &user.email)?;
    let refresh_token = tokens.issue_refresh(user.id)?;

    tracing::info!(user_id = %user.id, "user logged in");
    Ok(LoginOutcome { access_token, refresh_token, user: PublicUser::from(&user) })
}

/// Mint a fresh access token from a valid refresh token.
///
/// # Errors
///
/// [`AuthError::InvalidRefreshToken`] if the token fails verification or its user no
/// longer exists.
pub async fn refresh(store: &dyn UserStore, tokens: &TokenIssuer, refresh_token: &str) -> Result<String, AuthError> {
    let claims = tokens
        .verify_refresh(refresh_token)
        .map_err(|_| AuthError::InvalidRefreshToken)?;
    let user = store
        .find_by_id(claims.id)
        .await?
        .ok_or(AuthError::InvalidRefreshToken)?;
    Ok(tokens.issue_access(user.id, &user.email)?)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
