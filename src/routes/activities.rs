// SPDX-License-Identifier: MIT

//! Activity resource routes.
//!
//! Every mutation triggers a leaderboard refresh so the derived board
//! never goes stale relative to activity data.

use crate::error::{AppError, Result};
use crate::models::Activity;
use crate::services::leaderboard;
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

const DEFAULT_RECENT_LIMIT: usize = 10;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/activities", get(list_activities).post(create_activity))
        .route("/api/activities/by_user", get(activities_by_user))
        .route("/api/activities/recent", get(recent_activities))
        .route(
            "/api/activities/{id}",
            get(get_activity).put(update_activity).delete(delete_activity),
        )
}

#[derive(Debug, Deserialize, Validate)]
pub struct ActivityPayload {
    #[validate(email)]
    pub user_email: String,
    #[validate(length(min = 1, message = "activity_type must not be empty"))]
    pub activity_type: String,
    #[validate(range(min = 1, message = "duration_minutes must be positive"))]
    pub duration_minutes: u32,
    pub calories_burned: u32,
    #[validate(range(min = 0.0, message = "distance_km must not be negative"))]
    pub distance_km: Option<f64>,
    pub date: String,
    pub notes: Option<String>,
}

impl ActivityPayload {
    /// Parse and normalize the date to UTC RFC3339 with a `Z` suffix,
    /// the storage format that sorts lexicographically.
    fn normalized_date(&self) -> Result<String> {
        chrono::DateTime::parse_from_rfc3339(&self.date)
            .map(|dt| format_utc_rfc3339(dt.with_timezone(&chrono::Utc)))
            .map_err(|_| {
                AppError::BadRequest("Invalid 'date': must be RFC3339 datetime".to_string())
            })
    }
}

async fn list_activities(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Activity>>> {
    Ok(Json(state.db.list_activities()?))
}

async fn create_activity(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ActivityPayload>,
) -> Result<(StatusCode, Json<Activity>)> {
    payload.validate()?;
    let date = payload.normalized_date()?;

    let activity = Activity {
        id: Uuid::new_v4().to_string(),
        user_email: payload.user_email,
        activity_type: payload.activity_type,
        duration_minutes: payload.duration_minutes,
        calories_burned: payload.calories_burned,
        distance_km: payload.distance_km,
        date,
        notes: payload.notes,
    };
    state.db.upsert_activity(&activity)?;
    leaderboard::refresh(&state.db)?;

    tracing::info!(
        activity_id = %activity.id,
        user_email = %activity.user_email,
        activity_type = %activity.activity_type,
        "Activity recorded"
    );
    Ok((StatusCode::CREATED, Json(activity)))
}

async fn get_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Activity>> {
    let activity = state
        .db
        .get_activity(&id)?
        .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", id)))?;
    Ok(Json(activity))
}

async fn update_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<ActivityPayload>,
) -> Result<Json<Activity>> {
    payload.validate()?;
    let date = payload.normalized_date()?;

    if state.db.get_activity(&id)?.is_none() {
        return Err(AppError::NotFound(format!("Activity {} not found", id)));
    }

    let activity = Activity {
        id,
        user_email: payload.user_email,
        activity_type: payload.activity_type,
        duration_minutes: payload.duration_minutes,
        calories_burned: payload.calories_burned,
        distance_km: payload.distance_km,
        date,
        notes: payload.notes,
    };
    state.db.upsert_activity(&activity)?;
    leaderboard::refresh(&state.db)?;

    Ok(Json(activity))
}

async fn delete_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if !state.db.delete_activity(&id)? {
        return Err(AppError::NotFound(format!("Activity {} not found", id)));
    }
    leaderboard::refresh(&state.db)?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
struct ByUserQuery {
    email: Option<String>,
}

/// Get all activities for a specific user, most recent first.
async fn activities_by_user(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ByUserQuery>,
) -> Result<Json<Vec<Activity>>> {
    let email = params
        .email
        .ok_or_else(|| AppError::BadRequest("Email parameter is required".to_string()))?;

    Ok(Json(state.db.activities_for_user(&email)?))
}

#[derive(Deserialize)]
struct RecentQuery {
    limit: Option<usize>,
}

/// Get the most recent activities across all users.
async fn recent_activities(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RecentQuery>,
) -> Result<Json<Vec<Activity>>> {
    let limit = params.limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    Ok(Json(state.db.recent_activities(limit)?))
}
