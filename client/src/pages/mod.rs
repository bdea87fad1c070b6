//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (signals, fetches, validation)
//! and delegates rendering details to `components`.

pub mod admin_posts;
pub mod admin_scraper;
pub mod admin_users;
pub mod cycle_ingenieur;
pub mod forgot_password;
pub mod internship_detail;
pub mod internships;
pub mod landing;
pub mod login;
pub mod profile;
pub mod register;
pub mod reset_password;
pub mod university_detail;
