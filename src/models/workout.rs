// SPDX-License-Identifier: MIT

//! Workout catalog models.

use serde::{Deserialize, Serialize};

use crate::models::FitnessLevel;

/// A single exercise within a workout: either sets/reps or sets/duration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
}

/// Workout routine document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    /// Document ID (UUID v4)
    pub id: String,
    /// Workout name
    pub name: String,
    /// Description
    pub description: String,
    /// Target fitness level
    pub fitness_level: FitnessLevel,
    /// Expected duration in minutes
    pub duration_minutes: u32,
    /// Category (Strength, Cardio, ...)
    pub category: String,
    /// Ordered exercise list
    pub exercises: Vec<Exercise>,
}
