// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod activity;
pub mod leaderboard;
pub mod team;
pub mod user;
pub mod workout;

pub use activity::Activity;
pub use leaderboard::LeaderboardEntry;
pub use team::Team;
pub use user::{FitnessLevel, User};
pub use workout::{Exercise, Workout};
