// SPDX-License-Identifier: MIT

//! OctoFit Tracker: fitness tracking backend for teams of superheroes
//!
//! This crate provides the backend API for users, teams, activities,
//! workouts, and a calorie-ranked leaderboard derived from activity data.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::MemoryDb;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: MemoryDb,
}
