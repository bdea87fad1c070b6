//! Database initialization and migration runner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup uses this module to create the shared SQLx pool and enforce schema
//! migrations before accepting API traffic.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Initialize the `PostgreSQL` connection pool and run migrations.
///
/// # Errors
///
/// Returns an error if the connection or migrations fail.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;

    // Runs left in `running` belong to a previous process and can never finish.
    let orphaned = sqlx::query(
        "UPDATE scraper_runs SET status = 'failed', finished_at = now(), error = 'server restarted'
         WHERE status = 'running'",
    )
    .execute(&pool)
    .await?
    .rows_affected();
    if orphaned > 0 {
        tracing::warn!(orphaned, "marked interrupted scraper runs as failed");
    }

    Ok(pool)
}
