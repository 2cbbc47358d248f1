//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own credential logic and persistence concerns so route
//! handlers can stay focused on protocol translation and cookie plumbing.

pub mod auth;
pub mod password;
pub mod token;
pub mod users;
