// SPDX-License-Identifier: MIT

//! Team resource routes.

use crate::error::{AppError, Result};
use crate::models::{Team, User};
use crate::time_utils::now_rfc3339;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/teams", get(list_teams).post(create_team))
        .route(
            "/api/teams/{id}",
            get(get_team).put(update_team).delete(delete_team),
        )
        .route("/api/teams/{id}/members", get(team_members))
}

#[derive(Debug, Deserialize, Validate)]
pub struct TeamPayload {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: String,
    pub members_count: u32,
}

async fn list_teams(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Team>>> {
    Ok(Json(state.db.list_teams()?))
}

async fn create_team(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TeamPayload>,
) -> Result<(StatusCode, Json<Team>)> {
    payload.validate()?;

    if state.db.find_team_by_name(&payload.name)?.is_some() {
        return Err(AppError::BadRequest(format!(
            "A team named {} already exists",
            payload.name
        )));
    }

    let team = Team {
        id: Uuid::new_v4().to_string(),
        name: payload.name,
        description: payload.description,
        members_count: payload.members_count,
        created_at: now_rfc3339(),
    };
    state.db.upsert_team(&team)?;

    tracing::info!(team_id = %team.id, name = %team.name, "Team created");
    Ok((StatusCode::CREATED, Json(team)))
}

async fn get_team(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Team>> {
    let team = state
        .db
        .get_team(&id)?
        .ok_or_else(|| AppError::NotFound(format!("Team {} not found", id)))?;
    Ok(Json(team))
}

async fn update_team(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<TeamPayload>,
) -> Result<Json<Team>> {
    payload.validate()?;

    let existing = state
        .db
        .get_team(&id)?
        .ok_or_else(|| AppError::NotFound(format!("Team {} not found", id)))?;

    if let Some(other) = state.db.find_team_by_name(&payload.name)? {
        if other.id != id {
            return Err(AppError::BadRequest(format!(
                "A team named {} already exists",
                payload.name
            )));
        }
    }

    let team = Team {
        id,
        name: payload.name,
        description: payload.description,
        members_count: payload.members_count,
        created_at: existing.created_at,
    };
    state.db.upsert_team(&team)?;

    Ok(Json(team))
}

async fn delete_team(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if !state.db.delete_team(&id)? {
        return Err(AppError::NotFound(format!("Team {} not found", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Get all members of a team.
///
/// Membership is a free-text name match on the user's team field.
async fn team_members(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<User>>> {
    let team = state
        .db
        .get_team(&id)?
        .ok_or_else(|| AppError::NotFound(format!("Team {} not found", id)))?;

    Ok(Json(state.db.users_for_team(&team.name)?))
}
