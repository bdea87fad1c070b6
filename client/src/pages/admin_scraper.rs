//! Scraper console: current state, start and stop controls, and the most
//! recent runs. The status refreshes on its own while a run is active.

use leptos::prelude::*;

use crate::components::toast::use_toaster;
use crate::net::types::{ScraperRun, ScraperStatus};
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastKind;

/// Delay between status refreshes while a run is in progress.
pub(crate) const POLL_INTERVAL_MS: u32 = 3000;

pub(crate) fn can_start(status: &ScraperStatus) -> bool {
    status.feed_configured && !status.running
}

/// "12 fetched, 3 new" for finished runs; the error for failed ones.
pub(crate) fn run_summary(run: &ScraperRun) -> String {
    match run.error.as_deref() {
        Some(error) if !error.trim().is_empty() => error.trim().to_owned(),
        _ => format!("{} fetched, {} new", run.fetched, run.inserted),
    }
}

#[component]
pub fn AdminScraperPage() -> impl IntoView {
    let reload = RwSignal::new(0_u32);
    let busy = RwSignal::new(false);
    let toaster = use_toaster();

    let status = LocalResource::new(move || {
        reload.track();
        crate::net::api::fetch_scraper_status()
    });
    let refresh = move || reload.update(|n| *n += 1);

    // Poll while a run is active.
    Effect::new(move |_| {
        let running = status.get().and_then(Result::ok).is_some_and(|s| s.running);
        #[cfg(feature = "hydrate")]
        {
            if running {
                leptos::task::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(POLL_INTERVAL_MS).await;
                    refresh();
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (running, refresh);
    });

    let on_start = move |_| {
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::start_scraper().await {
                Ok(run_id) => toaster.push(ToastKind::Success, format!("Scraper run {run_id} started.")),
                Err(e) => toaster.push(ToastKind::Error, e),
            }
            busy.set(false);
            refresh();
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = toaster;
    };

    let on_stop = move |_| {
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::stop_scraper().await {
                Ok(()) => toaster.push(ToastKind::Info, "Scraper run stopped."),
                Err(e) => toaster.push(ToastKind::Error, e),
            }
            busy.set(false);
            refresh();
        });
    };

    view! {
        <div class="admin-page">
            <header class="page-header page-header--actions">
                <h1>"Scraper"</h1>
                <button class="btn" on:click=move |_| refresh() disabled=move || busy.get()>"Refresh"</button>
            </header>
            <Suspense fallback=move || view! { <p class="loading">"Loading scraper status..."</p> }>
                {move || {
                    status
                        .get()
                        .map(|result| match result {
                            Err(e) => view! { <p class="form-error">{e}</p> }.into_any(),
                            Ok(current) => {
                                let startable = can_start(&current);
                                let running = current.running;
                                let feed_configured = current.feed_configured;
                                view! {
                                    <section class="card scraper-status">
                                        {(!feed_configured)
                                            .then(|| {
                                                view! {
                                                    <p class="notice notice--warning">
                                                        "No feed is configured. Set SCRAPER_FEED_URL on the server to enable runs."
                                                    </p>
                                                }
                                            })}
                                        <p class="scraper-status__state">
                                            {if running { "A run is in progress." } else { "Idle." }}
                                            {current.current_run.clone().map(|id| format!(" Run {id}."))}
                                        </p>
                                        <div class="scraper-status__actions">
                                            <button
                                                class="btn btn--primary"
                                                disabled=move || busy.get() || !startable
                                                on:click=on_start
                                            >
                                                "Start run"
                                            </button>
                                            <button
                                                class="btn btn--danger"
                                                disabled=move || busy.get() || !running
                                                on:click=on_stop
                                            >
                                                "Stop"
                                            </button>
                                        </div>
                                    </section>
                                    <RunTable runs=current.recent_runs/>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn RunTable(runs: Vec<ScraperRun>) -> impl IntoView {
    if runs.is_empty() {
        return view! { <p class="empty-state">"No runs yet."</p> }.into_any();
    }
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Started"</th>
                    <th>"Finished"</th>
                    <th>"Status"</th>
                    <th>"Result"</th>
                </tr>
            </thead>
            <tbody>
                {runs
                    .into_iter()
                    .map(|run| {
                        let summary = run_summary(&run);
                        view! {
                            <tr>
                                <td>{run.started_at}</td>
                                <td>{run.finished_at.unwrap_or_else(|| "-".to_owned())}</td>
                                <td>
                                    <span class=format!("badge badge--{}", run.status.css_modifier())>{run.status.label()}</span>
                                </td>
                                <td>{summary}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
        .into_any()
}

#[cfg(test)]
#[path = "admin_scraper_test.rs"]
mod admin_scraper_test;
