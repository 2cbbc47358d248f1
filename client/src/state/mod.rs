//! Client application state.

pub mod auth;
