//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Everything inside is either `Clone` or behind an `Arc`, so cloning per
//! request is cheap. The university catalog is immutable after startup.

use std::sync::Arc;

use models::Catalog;
use sqlx::PgPool;

use crate::config::Config;
use crate::rate_limit::RateLimiter;
use crate::services::scraper::ScraperController;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub catalog: Arc<Catalog>,
    /// Failed-login throttle keyed by normalized email.
    pub login_limiter: RateLimiter,
    pub scraper: ScraperController,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool, config: Config, catalog: Catalog) -> Self {
        let login_limiter = RateLimiter::new(config.login_rate_limit, config.login_rate_window);
        let scraper = ScraperController::new(config.scraper_feed_url.clone(), config.scraper_timeout);
        Self { pool, config: Arc::new(config), catalog: Arc::new(catalog), login_limiter, scraper }
    }
}

#[cfg(test)]
#[path = "state_helpers_test.rs"]
pub mod test_helpers;

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
