// SPDX-License-Identifier: MIT

//! Leaderboard entry model.
//!
//! Entries are derived data: one per user, recomputed in bulk by the
//! leaderboard service whenever activities change. They are never
//! mutated through the API.

use serde::{Deserialize, Serialize};

/// Per-user aggregate snapshot with its position on the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Document ID (UUID v4, regenerated per snapshot)
    pub id: String,
    /// User's email (join key back to the user)
    pub user_email: String,
    /// User's display name at snapshot time
    pub user_name: String,
    /// User's team name at snapshot time
    pub team: String,
    /// Number of recorded activities
    pub total_activities: u32,
    /// Sum of calories burned across all activities
    pub total_calories: u64,
    /// Sum of distances (km), rounded to 2 decimals
    pub total_distance: f64,
    /// Dense rank, 1..N by total calories descending
    pub rank: u32,
}
