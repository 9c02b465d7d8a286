// SPDX-License-Identifier: MIT

//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// Self-reported fitness level, shared by users and workouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// User profile document.
///
/// The email is the join key across activities and leaderboard entries;
/// uniqueness is enforced at the API layer on create/update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Document ID (UUID v4)
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address (unique join key)
    pub email: String,
    /// Team name (free-text reference, not an owned id)
    pub team: String,
    /// Fitness level
    pub fitness_level: FitnessLevel,
    /// When the user was created (RFC3339)
    pub created_at: String,
}
