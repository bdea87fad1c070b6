#![recursion_limit = "256"]

mod config;
mod db;
mod rate_limit;
mod routes;
mod services;
mod state;

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing_subscriber::EnvFilter;

const MAINTENANCE_INTERVAL: Duration = Duration::from_secs(15 * 60);

#[tokio::main]
async fn main() {
    // A missing .env file is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::Config::from_env().expect("invalid configuration");
    let catalog = models::Catalog::bundled().expect("bundled university catalog is invalid");
    for issue in catalog.consistency_issues() {
        tracing::warn!(?issue, "university catalog inconsistency");
    }

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");

    if let Err(e) = services::scraper::fail_interrupted_runs(&pool, None).await {
        tracing::error!(error = %e, "failed to close interrupted scraper runs");
    }

    if config.resend.is_none() {
        tracing::warn!("RESEND_API_KEY/RESEND_FROM not set; password reset links will only be logged");
    }
    if config.scraper_feed_url.is_none() {
        tracing::warn!("SCRAPER_FEED_URL not set; scraper runs are disabled");
    }

    let port = config.port;
    let state = state::AppState::new(pool, config, catalog);

    let _maintenance = spawn_maintenance_task(state.clone());

    let app = routes::app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "universe listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server failed");
}

/// Periodically drop expired sessions/reset tokens and idle rate-limit keys.
fn spawn_maintenance_task(state: state::AppState) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(MAINTENANCE_INTERVAL);
        loop {
            interval.tick().await;
            state.login_limiter.prune_idle();
            match services::session::purge_expired(&state.pool).await {
                Ok(0) => {}
                Ok(purged) => tracing::info!(purged, "expired sessions and reset tokens purged"),
                Err(e) => tracing::warn!(error = %e, "maintenance purge failed"),
            }
        }
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
