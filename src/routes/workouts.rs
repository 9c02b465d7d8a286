// SPDX-License-Identifier: MIT

//! Workout catalog routes.

use crate::error::{AppError, Result};
use crate::models::{Exercise, FitnessLevel, Workout};
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
        .route("/api/workouts", get(list_workouts).post(create_workout))
        .route("/api/workouts/by_fitness_level", get(workouts_by_fitness_level))
        .route("/api/workouts/by_category", get(workouts_by_category))
        .route(
            "/api/workouts/{id}",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
}

#[derive(Debug, Deserialize, Validate)]
pub struct WorkoutPayload {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: String,
    pub fitness_level: FitnessLevel,
    #[validate(range(min = 1, message = "duration_minutes must be positive"))]
    pub duration_minutes: u32,
    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: String,
    pub exercises: Vec<Exercise>,
}

async fn list_workouts(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Workout>>> {
    Ok(Json(state.db.list_workouts()?))
}

async fn create_workout(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<WorkoutPayload>,
) -> Result<(StatusCode, Json<Workout>)> {
    payload.validate()?;

    let workout = Workout {
        id: Uuid::new_v4().to_string(),
        name: payload.name,
        description: payload.description,
        fitness_level: payload.fitness_level,
        duration_minutes: payload.duration_minutes,
        category: payload.category,
        exercises: payload.exercises,
    };
    state.db.upsert_workout(&workout)?;

    tracing::info!(workout_id = %workout.id, name = %workout.name, "Workout created");
    Ok((StatusCode::CREATED, Json(workout)))
}

async fn get_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Workout>> {
    let workout = state
        .db
        .get_workout(&id)?
        .ok_or_else(|| AppError::NotFound(format!("Workout {} not found", id)))?;
    Ok(Json(workout))
}

async fn update_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<WorkoutPayload>,
) -> Result<Json<Workout>> {
    payload.validate()?;

    if state.db.get_workout(&id)?.is_none() {
        return Err(AppError::NotFound(format!("Workout {} not found", id)));
    }

    let workout = Workout {
        id,
        name: payload.name,
        description: payload.description,
        fitness_level: payload.fitness_level,
        duration_minutes: payload.duration_minutes,
        category: payload.category,
        exercises: payload.exercises,
    };
    state.db.upsert_workout(&workout)?;

    Ok(Json(workout))
}

async fn delete_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if !state.db.delete_workout(&id)? {
        return Err(AppError::NotFound(format!("Workout {} not found", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
struct ByFitnessLevelQuery {
    fitness_level: Option<FitnessLevel>,
}

/// Get workouts filtered by fitness level.
async fn workouts_by_fitness_level(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ByFitnessLevelQuery>,
) -> Result<Json<Vec<Workout>>> {
    let level = params.fitness_level.ok_or_else(|| {
        AppError::BadRequest("Fitness level parameter is required".to_string())
    })?;

    Ok(Json(state.db.workouts_by_fitness_level(level)?))
}

#[derive(Deserialize)]
struct ByCategoryQuery {
    category: Option<String>,
}

/// Get workouts filtered by category.
async fn workouts_by_category(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ByCategoryQuery>,
) -> Result<Json<Vec<Workout>>> {
    let category = params
        .category
        .ok_or_else(|| AppError::BadRequest("Category parameter is required".to_string()))?;

    Ok(Json(state.db.workouts_by_category(&category)?))
}
