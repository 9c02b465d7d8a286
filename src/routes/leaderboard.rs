// SPDX-License-Identifier: MIT

//! Leaderboard routes (read-only).
//!
//! The board is derived from activity data, so there are no mutation
//! endpoints; writes happen only through the leaderboard service.

use crate::error::{AppError, Result};
use crate::models::LeaderboardEntry;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

const DEFAULT_TOP_LIMIT: usize = 10;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/leaderboard", get(list_leaderboard))
        .route("/api/leaderboard/top", get(top_leaderboard))
        .route("/api/leaderboard/by_team", get(leaderboard_by_team))
        .route("/api/leaderboard/{id}", get(get_entry))
}

/// Full leaderboard in rank order.
async fn list_leaderboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LeaderboardEntry>>> {
    Ok(Json(state.db.list_leaderboard()?))
}

async fn get_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<LeaderboardEntry>> {
    let entry = state
        .db
        .get_leaderboard_entry(&id)?
        .ok_or_else(|| AppError::NotFound(format!("Leaderboard entry {} not found", id)))?;
    Ok(Json(entry))
}

#[derive(Deserialize)]
struct TopQuery {
    limit: Option<usize>,
}

/// Get the top N entries of the current ranking.
async fn top_leaderboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TopQuery>,
) -> Result<Json<Vec<LeaderboardEntry>>> {
    let limit = params.limit.unwrap_or(DEFAULT_TOP_LIMIT);
    let mut entries = state.db.list_leaderboard()?;
    entries.truncate(limit);
    Ok(Json(entries))
}

#[derive(Deserialize)]
struct ByTeamQuery {
    team: Option<String>,
}

/// Get leaderboard entries for one team, rank order preserved.
async fn leaderboard_by_team(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ByTeamQuery>,
) -> Result<Json<Vec<LeaderboardEntry>>> {
    let team = params
        .team
        .ok_or_else(|| AppError::BadRequest("Team parameter is required".to_string()))?;

    let entries: Vec<LeaderboardEntry> = state
        .db
        .list_leaderboard()?
        .into_iter()
        .filter(|entry| entry.team == team)
        .collect();
    Ok(Json(entries))
}
