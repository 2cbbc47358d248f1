//! Auth routes: signup, login, refresh, logout, and the current user.

use axum::extract::{FromRef, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;
use time::Duration;

use crate::services::auth::{self as auth_svc, AuthError, LoginRequest, SignupRequest};
use crate::services::users::PublicUser;
use crate::state::{AppState, CookieSettings};

pub(crate) const REFRESH_COOKIE_NAME: &str = "refreshToken";

#[derive(Debug, Serialize)]
struct MessageBody {
    message: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginBody {
    message: &'static str,
    access_token: String,
    user: PublicUser,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshBody {
    message: &'static str,
    access_token: String,
}

fn message(status: StatusCode, message: &'static str) -> Response {
    (status, Json(MessageBody { message })).into_response()
}

/// Map a service error to a client-facing response. Internal detail is logged,
/// never serialized.
pub(crate) fn auth_error_response(err: &AuthError, internal_message: &'static str) -> Response {
    match err {
        AuthError::Conflict => message(StatusCode::BAD_REQUEST, "User already exists"),
        AuthError::InvalidCredentials => message(StatusCode::UNAUTHORIZED, "Invalid email or password"),
        AuthError::InvalidRefreshToken => message(StatusCode::UNAUTHORIZED, "Invalid refresh token"),
        AuthError::TokenIssue(e) => {
            tracing::error!(error = %e, "token issuance failed");
            message(StatusCode::NOT_FOUND, "Token issuance failed")
        }
        AuthError::Internal(e) => {
            tracing::error!(error = %e, "{internal_message}");
            message(StatusCode::INTERNAL_SERVER_ERROR, internal_message)
        }
    }
}

fn cookie_max_age(secs: u64) -> Duration {
    Duration::seconds(i64::try_from(secs).unwrap_or(i64::MAX))
}

/// Build the refresh-token cookie. `HttpOnly` keeps it away from page script;
/// `SameSite=None` lets a separately hosted SPA send it, which browsers only
/// honor alongside `Secure`.
pub(crate) fn refresh_cookie(token: String, settings: CookieSettings, max_age: Duration) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::None)
        .secure(settings.secure)
        .max_age(max_age)
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// User resolved from a valid `Authorization: Bearer <access token>` header.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: PublicUser,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let unauthorized = || message(StatusCode::UNAUTHORIZED, "Unauthorized");

        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .unwrap_or_default();
        if token.is_empty() {
            return Err(unauthorized());
        }

        let app_state = AppState::from_ref(state);
        let claims = app_state
            .tokens
            .verify_access(token)
            .map_err(|_| unauthorized())?;
        let user = app_state
            .users
            .find_by_id(claims.id)
            .await
            .map_err(|e| auth_error_response(&AuthError::from(e), "Request failed"))?
            .ok_or_else(unauthorized)?;

        Ok(Self { user: PublicUser::from(&user) })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /auth/signup`: Create a user; 400 if the email is taken.
pub async fn signup(State(state): State<AppState>, Json(req): Json<SignupRequest>) -> Response {
    match auth_svc::register(state.users.as_ref(), req).await {
        Ok(_) => message(StatusCode::CREATED, "User registered successfully"),
        Err(e) => auth_error_response(&e, "Registration failed"),
    }
}

/// `POST /auth/login`: Verify credentials, set the refresh cookie, return the access token.
pub async fn login(State(state): State<AppState>, Json(req): Json<LoginRequest>) -> Response {
    let outcome = match auth_svc::login(state.users.as_ref(), &state.tokens, req).await {
        Ok(outcome) => outcome,
        Err(e) => return auth_error_response(&e, "Login failed"),
    };

    let max_age = cookie_max_age(state.tokens.refresh_ttl().as_secs());
    let jar = CookieJar::new().add(refresh_cookie(outcome.refresh_token, state.cookies, max_age));
    let body = LoginBody { message: "Login Successful", access_token: outcome.access_token, user: outcome.user };
    (jar, Json(body)).into_response()
}

/// `POST /auth/refresh`: Exchange the refresh cookie for a new access token.
pub async fn refresh(State(state): State<AppState>, jar: CookieJar) -> Response {
    let token = jar
        .get(REFRESH_COOKIE_NAME)
        .map(Cookie::value)
        .unwrap_or_default();
    if token.is_empty() {
        return auth_error_response(&AuthError::InvalidRefreshToken, "Refresh failed");
    }

    match auth_svc::refresh(state.users.as_ref(), &state.tokens, token).await {
        Ok(access_token) => Json(RefreshBody { message: "Token refreshed", access_token }).into_response(),
        Err(e) => auth_error_response(&e, "Refresh failed"),
    }
}

/// `POST /auth/logout`: Expire the refresh cookie. Outstanding tokens stay valid
/// until their own expiry; there is no server-side revocation.
pub async fn logout(State(state): State<AppState>) -> Response {
    let jar = CookieJar::new().add(refresh_cookie(String::new(), state.cookies, Duration::ZERO));
    (jar, Json(MessageBody { message: "Logged out" })).into_response()
}

/// `GET /auth/me`: Return the user behind the bearer access token.
pub async fn me(auth: AuthUser) -> Json<PublicUser> {
    Json(auth.user)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
