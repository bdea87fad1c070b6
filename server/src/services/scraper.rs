//! Scraper controller: fetches the internship feed and upserts posts.
//!
//! DESIGN
//! ======
//! At most one run is active per process. The controller keeps the running
//! task's `JoinHandle` behind a `tokio::sync::Mutex`; `start` refuses while a
//! run is live and `stop` aborts it. Every run is recorded in `scraper_runs`
//! and moves out of `running` exactly once: the task and `stop` both update
//! with `WHERE status = 'running'`, so whichever lands first wins. Rows left
//! `running` without a live task (process restart, panicked task) are closed
//! as `failed` with the error `interrupted`, at startup and whenever the
//! controller observes no live run.
//!
//! The feed is JSON, either a bare array of posts or `{ "posts": [...] }`.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::posts::{self, NewPost, PostError};

const RECENT_RUNS: i64 = 10;

/// Error recorded on runs that lost their task.
pub const INTERRUPTED: &str = "interrupted";

#[derive(Debug, thiserror::Error)]
pub enum ScraperError {
    #[error("scraper feed URL is not configured")]
    NotConfigured,
    #[error("a scraper run is already in progress")]
    AlreadyRunning,
    #[error("no scraper run is in progress")]
    NotRunning,
    #[error("feed request failed: {0}")]
    Fetch(String),
    #[error("feed payload is invalid: {0}")]
    Feed(String),
    #[error(transparent)]
    Post(#[from] PostError),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Running,
    Succeeded,
    Failed,
    Stopped,
}

impl RunStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Stopped => "stopped",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "running" => Some(Self::Running),
            "succeeded" => Some(Self::Succeeded),
            "failed" => Some(Self::Failed),
            "stopped" => Some(Self::Stopped),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScraperRun {
    pub id: Uuid,
    /// RFC 3339, UTC.
    pub started_at: String,
    pub finished_at: Option<String>,
    pub status: RunStatus,
    pub fetched: i32,
    pub inserted: i32,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScraperStatus {
    pub running: bool,
    pub current_run: Option<Uuid>,
    pub feed_configured: bool,
    pub recent_runs: Vec<ScraperRun>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FeedPayload {
    List(Vec<NewPost>),
    Wrapped { posts: Vec<NewPost> },
}

/// Parse a feed body into posts.
///
/// # Errors
///
/// Returns [`ScraperError::Feed`] if the body is not one of the accepted shapes.
pub fn parse_feed(body: &str) -> Result<Vec<NewPost>, ScraperError> {
    let payload: FeedPayload = serde_json::from_str(body).map_err(|e| ScraperError::Feed(e.to_string()))?;
    Ok(match payload {
        FeedPayload::List(posts) | FeedPayload::Wrapped { posts } => posts,
    })
}

struct ActiveRun {
    run_id: Uuid,
    handle: JoinHandle<()>,
}

impl ActiveRun {
    fn is_live(&self) -> bool {
        !self.handle.is_finished()
    }
}

// =============================================================================
// CONTROLLER
// =============================================================================

#[derive(Clone)]
pub struct ScraperController {
    active: Arc<Mutex<Option<ActiveRun>>>,
    http: reqwest::Client,
    feed_url: Option<String>,
    timeout: Duration,
}

impl ScraperController {
    #[must_use]
    pub fn new(feed_url: Option<String>, timeout: Duration) -> Self {
        Self { active: Arc::new(Mutex::new(None)), http: reqwest::Client::new(), feed_url, timeout }
    }

    #[must_use]
    pub fn feed_configured(&self) -> bool {
        self.feed_url.is_some()
    }

    /// Id of the live run, if any.
    pub async fn current_run(&self) -> Option<Uuid> {
        let active = self.active.lock().await;
        active.as_ref().filter(|run| run.is_live()).map(|run| run.run_id)
    }

    /// Start a run in the background and return its id.
    pub async fn start(&self, pool: &PgPool) -> Result<Uuid, ScraperError> {
        let Some(feed_url) = self.feed_url.clone() else {
            return Err(ScraperError::NotConfigured);
        };

        let mut active = self.active.lock().await;
        if active.as_ref().is_some_and(ActiveRun::is_live) {
            return Err(ScraperError::AlreadyRunning);
        }
        fail_interrupted_runs(pool, None).await?;

        let run_id: Uuid = sqlx::query_scalar("INSERT INTO scraper_runs (status) VALUES ('running') RETURNING id")
            .fetch_one(pool)
            .await?;

        let pool = pool.clone();
        let http = self.http.clone();
        let timeout = self.timeout;
        let handle = tokio::spawn(async move {
            let outcome = fetch_and_store(&pool, &http, &feed_url, timeout).await;
            if let Err(e) = finish_run(&pool, run_id, outcome).await {
                error!(%run_id, error = %e, "failed to record scraper run result");
            }
        });

        *active = Some(ActiveRun { run_id, handle });
        info!(%run_id, "scraper run started");
        Ok(run_id)
    }

    /// Abort the live run and record it as stopped.
    pub async fn stop(&self, pool: &PgPool) -> Result<Uuid, ScraperError> {
        let mut active = self.active.lock().await;
        let Some(run) = active.take().filter(ActiveRun::is_live) else {
            return Err(ScraperError::NotRunning);
        };
        run.handle.abort();

        sqlx::query(
            "UPDATE scraper_runs SET status = 'stopped', finished_at = now()
             WHERE id = $1 AND status = 'running'",
        )
        .bind(run.run_id)
        .execute(pool)
        .await?;
        info!(run_id = %run.run_id, "scraper run stopped");
        Ok(run.run_id)
    }

    pub async fn status(&self, pool: &PgPool) -> Result<ScraperStatus, ScraperError> {
        let current_run = {
            // Held across the cleanup so a concurrent `start` cannot insert
            // a row that would be mistaken for an orphan.
            let active = self.active.lock().await;
            let live = active.as_ref().filter(|run| run.is_live()).map(|run| run.run_id);
            fail_interrupted_runs(pool, live).await?;
            live
        };
        Ok(ScraperStatus {
            running: current_run.is_some(),
            current_run,
            feed_configured: self.feed_configured(),
            recent_runs: recent_runs(pool, RECENT_RUNS).await?,
        })
    }
}

// =============================================================================
// RUN BODY
// =============================================================================

/// Counts for a successful run: (fetched, inserted).
type RunCounts = (usize, u64);

async fn fetch_and_store(
    pool: &PgPool,
    http: &reqwest::Client,
    feed_url: &str,
    timeout: Duration,
) -> Result<RunCounts, ScraperError> {
    let response = http
        .get(feed_url)
        .timeout(timeout)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|e| ScraperError::Fetch(e.to_string()))?;
    let body = response
        .text()
        .await
        .map_err(|e| ScraperError::Fetch(e.to_string()))?;

    let posts = parse_feed(&body)?;
    let inserted = posts::upsert_posts(pool, &posts).await?;
    Ok((posts.len(), inserted))
}

async fn finish_run(pool: &PgPool, run_id: Uuid, outcome: Result<RunCounts, ScraperError>) -> Result<(), sqlx::Error> {
    let (status, fetched, inserted, message) = match outcome {
        Ok((fetched, inserted)) => {
            info!(%run_id, fetched, inserted, "scraper run succeeded");
            (RunStatus::Succeeded, fetched, inserted, None)
        }
        Err(e) => {
            warn!(%run_id, error = %e, "scraper run failed");
            (RunStatus::Failed, 0, 0, Some(e.to_string()))
        }
    };

    sqlx::query(
        "UPDATE scraper_runs
         SET status = $2, finished_at = now(), fetched = $3, inserted = $4, error = $5
         WHERE id = $1 AND status = 'running'",
    )
    .bind(run_id)
    .bind(status.as_str())
    .bind(i32::try_from(fetched).unwrap_or(i32::MAX))
    .bind(i32::try_from(inserted).unwrap_or(i32::MAX))
    .bind(message)
    .execute(pool)
    .await?;
    Ok(())
}

/// Mark every `running` row other than `live` as failed. Returns the number
/// of rows closed.
pub async fn fail_interrupted_runs(pool: &PgPool, live: Option<Uuid>) -> Result<u64, sqlx::Error> {
    let closed = sqlx::query(
        "UPDATE scraper_runs
         SET status = 'failed', finished_at = now(), error = $2
         WHERE status = 'running' AND ($1::uuid IS NULL OR id <> $1)",
    )
    .bind(live)
    .bind(INTERRUPTED)
    .execute(pool)
    .await?
    .rows_affected();
    if closed > 0 {
        warn!(closed, "closed scraper runs left running without a task");
    }
    Ok(closed)
}

pub async fn recent_runs(pool: &PgPool, limit: i64) -> Result<Vec<ScraperRun>, ScraperError> {
    let rows = sqlx::query(
        r#"SELECT id,
                  to_char(started_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS started_at,
                  to_char(finished_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS finished_at,
                  status, fetched, inserted, error
           FROM scraper_runs
           ORDER BY started_at DESC
           LIMIT $1"#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|r| {
            let status: String = r.get("status");
            ScraperRun {
                id: r.get("id"),
                started_at: r.get("started_at"),
                finished_at: r.get("finished_at"),
                status: RunStatus::parse(&status).unwrap_or(RunStatus::Failed),
                fetched: r.get("fetched"),
                inserted: r.get("inserted"),
                error: r.get("error"),
            }
        })
        .collect())
}

#[cfg(test)]
#[path = "scraper_test.rs"]
mod tests;
