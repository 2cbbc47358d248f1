//! Shared client helpers.

pub mod auth;
