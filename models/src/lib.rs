//! Shared domain model for the Universe directory and internship feed.
//!
//! This crate owns the types used by both `server` and `client`: the bundled
//! engineering-school catalog and its search/filter projections, the
//! admission-chance heuristic, internship posts with their derived moderation
//! status, user roles, and the paginated envelope returned by list endpoints.
//! It performs no I/O so the same code runs natively and in the browser.

pub mod admission;
pub mod catalog;
pub mod page;
pub mod post;
pub mod search;
pub mod university;
pub mod user;

pub use catalog::{Catalog, CatalogError};
pub use university::{ContestStatus, DetailedSpecialty, LicenseSet, University, UniversityType};
