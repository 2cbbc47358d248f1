//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and talks to `net::api` directly; shared
//! session state comes from `AuthContext`.

pub mod dashboard;
pub mod login;
pub mod signup;
