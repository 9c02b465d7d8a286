// SPDX-License-Identifier: MIT

//! User resource routes.

use crate::error::{AppError, Result};
use crate::models::{FitnessLevel, User};
use crate::time_utils::now_rfc3339;
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

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/by_email", get(user_by_email))
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// Full-record mutation payload, used for both create and update.
#[derive(Debug, Deserialize, Validate)]
pub struct UserPayload {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub team: String,
    pub fitness_level: FitnessLevel,
}

async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>> {
    Ok(Json(state.db.list_users()?))
}

async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<User>)> {
    payload.validate()?;

    // Email is the join key for activities and the leaderboard, so it
    // must be unique across users.
    if state.db.find_user_by_email(&payload.email)?.is_some() {
        return Err(AppError::BadRequest(format!(
            "A user with email {} already exists",
            payload.email
        )));
    }

    let user = User {
        id: Uuid::new_v4().to_string(),
        name: payload.name,
        email: payload.email,
        team: payload.team,
        fitness_level: payload.fitness_level,
        created_at: now_rfc3339(),
    };
    state.db.upsert_user(&user)?;

    tracing::info!(user_id = %user.id, email = %user.email, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<User>> {
    let user = state
        .db
        .get_user(&id)?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;
    Ok(Json(user))
}

async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<User>> {
    payload.validate()?;

    let existing = state
        .db
        .get_user(&id)?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

    if let Some(other) = state.db.find_user_by_email(&payload.email)? {
        if other.id != id {
            return Err(AppError::BadRequest(format!(
                "A user with email {} already exists",
                payload.email
            )));
        }
    }

    let user = User {
        id,
        name: payload.name,
        email: payload.email,
        team: payload.team,
        fitness_level: payload.fitness_level,
        created_at: existing.created_at,
    };
    state.db.upsert_user(&user)?;

    Ok(Json(user))
}

async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if !state.db.delete_user(&id)? {
        return Err(AppError::NotFound(format!("User {} not found", id)));
    }
    tracing::info!(user_id = %id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
struct EmailQuery {
    email: Option<String>,
}

/// Get a user by email.
async fn user_by_email(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EmailQuery>,
) -> Result<Json<User>> {
    let email = params
        .email
        .ok_or_else(|| AppError::BadRequest("Email parameter is required".to_string()))?;

    let user = state
        .db
        .find_user_by_email(&email)?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(Json(user))
}
