//! Client-side state containers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` is created once in `App` and handed to guards and pages as a prop.
//! `catalog` parses the bundled school directory once per process.
//! `toast` is provided through Leptos context because any component may
//! raise a notification.

pub mod auth;
pub mod catalog;
pub mod toast;
