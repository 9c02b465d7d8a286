// SPDX-License-Identifier: MIT

//! Services module - business logic layer.

pub mod leaderboard;
pub mod seed;

pub use seed::SeedSummary;
