// SPDX-License-Identifier: MIT

//! OctoFit Tracker API Server
//!
//! Fitness tracking backend for teams: users, teams, activities, a
//! calorie-ranked leaderboard, and a workout catalog. Pass `--seed` to
//! populate the store with the demo dataset at startup.

use octofit_tracker::{config::Config, db::MemoryDb, services::seed, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting OctoFit Tracker API");

    // Initialize the document store
    let db = MemoryDb::new();

    // Optionally seed the demo dataset. The store is in-process, so the
    // one-shot seed runs inside the server rather than as a separate
    // management command.
    if std::env::args().any(|arg| arg == "--seed") {
        let summary = seed::populate(&db)?;
        tracing::info!(
            users = summary.users,
            teams = summary.teams,
            activities = summary.activities,
            leaderboard_entries = summary.leaderboard_entries,
            workouts = summary.workouts,
            "Demo dataset seeded"
        );
    }

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
    });

    // Build router
    let app = octofit_tracker::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("octofit_tracker=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
