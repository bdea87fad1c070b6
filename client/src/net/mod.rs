//! Networking modules for the JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP calls against the axum backend and `types` defines the
//! wire schema the server returns that is not already owned by `models`.

pub mod api;
pub mod types;
