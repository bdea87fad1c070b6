//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render props and report user actions through callbacks. The
//! only shared state they read is the auth signal passed in by the caller and
//! the toast queue provided by `App`.

pub mod footer;
pub mod image_cropper_modal;
pub mod internship_card;
pub mod nav;
pub mod option_list;
pub mod pagination;
pub mod route_guard;
pub mod score_comparison;
pub mod toast;
pub mod university_card;
