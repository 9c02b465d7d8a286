// SPDX-License-Identifier: MIT

//! Activity model for storage and API.

use serde::{Deserialize, Serialize};

/// A recorded exercise session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Document ID (UUID v4)
    pub id: String,
    /// Owning user's email (denormalized join key)
    pub user_email: String,
    /// Activity type (Running, Cycling, Yoga, ...)
    pub activity_type: String,
    /// Duration in minutes (>= 1)
    pub duration_minutes: u32,
    /// Calories burned
    pub calories_burned: u32,
    /// Distance in km; only meaningful for distance-based activity types
    pub distance_km: Option<f64>,
    /// When the activity took place (RFC3339)
    pub date: String,
    /// Free-form notes
    pub notes: Option<String>,
}
