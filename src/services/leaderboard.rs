// SPDX-License-Identifier: MIT

//! Leaderboard aggregation and ranking.
//!
//! The leaderboard is derived data: one entry per user summarizing their
//! recorded activities, ordered by total calories burned. `rebuild` and
//! `rank` are pure so they can be tested without a store; `refresh` wires
//! them to the database and swaps the snapshot in wholesale, which keeps
//! readers from ever observing a half-ranked board.

use uuid::Uuid;

use crate::db::MemoryDb;
use crate::error::AppError;
use crate::models::{Activity, LeaderboardEntry, User};

/// Round to 2 decimal places, the precision stored for total distance.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute one unranked entry per user from the full activity set.
///
/// Activities are joined to users by email. A user with no activities
/// gets zero-valued aggregates rather than being omitted.
pub fn rebuild(users: &[User], activities: &[Activity]) -> Vec<LeaderboardEntry> {
    users
        .iter()
        .map(|user| {
            let mut total_activities = 0u32;
            let mut total_calories = 0u64;
            let mut total_distance = 0.0f64;

            for activity in activities.iter().filter(|a| a.user_email == user.email) {
                total_activities += 1;
                total_calories += u64::from(activity.calories_burned);
                if let Some(distance) = activity.distance_km {
                    total_distance += distance;
                }
            }

            LeaderboardEntry {
                id: Uuid::new_v4().to_string(),
                user_email: user.email.clone(),
                user_name: user.name.clone(),
                team: user.team.clone(),
                total_activities,
                total_calories,
                total_distance: round2(total_distance),
                rank: 0,
            }
        })
        .collect()
}

/// Assign dense ranks 1..N by total calories descending.
///
/// Ties are broken by user email ascending so ranking is deterministic
/// regardless of input order. Returns a new ranked sequence; totals are
/// untouched.
pub fn rank(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| {
        b.total_calories
            .cmp(&a.total_calories)
            .then_with(|| a.user_email.cmp(&b.user_email))
    });
    for (position, entry) in entries.iter_mut().enumerate() {
        entry.rank = (position + 1) as u32;
    }
    entries
}

/// Recompute the full snapshot from the store and replace it.
///
/// Called after every activity write and by the seed routine, so the
/// board never drifts from activity data. Returns the entry count.
pub fn refresh(db: &MemoryDb) -> Result<usize, AppError> {
    let users = db.list_users()?;
    let activities = db.list_activities()?;

    let ranked = rank(rebuild(&users, &activities));
    db.replace_leaderboard(&ranked)?;

    tracing::debug!(entries = ranked.len(), "Leaderboard refreshed");
    Ok(ranked.len())
}
