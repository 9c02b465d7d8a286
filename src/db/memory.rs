// SPDX-License-Identifier: MIT

//! In-process document store with typed operations.
//!
//! Provides high-level operations for:
//! - Users (profiles, keyed by id, looked up by email)
//! - Teams (keyed by id, looked up by name)
//! - Activities (exercise sessions, equality-filtered by user email)
//! - Leaderboard (derived snapshot, replaced wholesale)
//! - Workouts (catalog, equality-filtered by level and category)
//!
//! Collections are `DashMap`s keyed by document id. A monotonic sequence
//! number is assigned on first insert so listings come back in insertion
//! order; upserts keep the original position. The interface returns
//! `Result` throughout so a networked document store can replace this
//! one without touching the call sites.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::AppError;
use crate::models::{Activity, FitnessLevel, LeaderboardEntry, Team, User, Workout};

/// A document plus its insertion sequence number.
#[derive(Debug, Clone)]
struct Stored<T> {
    seq: u64,
    doc: T,
}

#[derive(Default)]
struct Inner {
    seq: AtomicU64,
    users: DashMap<String, Stored<User>>,
    teams: DashMap<String, Stored<Team>>,
    activities: DashMap<String, Stored<Activity>>,
    leaderboard: DashMap<String, Stored<LeaderboardEntry>>,
    workouts: DashMap<String, Stored<Workout>>,
}

/// Cheaply clonable handle to the shared document store.
#[derive(Clone, Default)]
pub struct MemoryDb {
    inner: Arc<Inner>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_seq(&self) -> u64 {
        self.inner.seq.fetch_add(1, Ordering::Relaxed)
    }

    /// List a collection's documents in insertion order.
    fn list_ordered<T: Clone>(col: &DashMap<String, Stored<T>>) -> Vec<T> {
        let mut items: Vec<(u64, T)> = col
            .iter()
            .map(|entry| (entry.value().seq, entry.value().doc.clone()))
            .collect();
        items.sort_by_key(|(seq, _)| *seq);
        items.into_iter().map(|(_, doc)| doc).collect()
    }

    /// Insert or overwrite a document, keeping its original list position.
    fn upsert_ordered<T>(&self, col: &DashMap<String, Stored<T>>, id: &str, doc: T) {
        match col.entry(id.to_string()) {
            Entry::Occupied(mut occupied) => {
                let seq = occupied.get().seq;
                occupied.insert(Stored { seq, doc });
            }
            Entry::Vacant(vacant) => {
                vacant.insert(Stored {
                    seq: self.next_seq(),
                    doc,
                });
            }
        }
    }

    // ─── User Operations ─────────────────────────────────────────

    pub fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(Self::list_ordered(&self.inner.users))
    }

    pub fn get_user(&self, id: &str) -> Result<Option<User>, AppError> {
        Ok(self.inner.users.get(id).map(|entry| entry.doc.clone()))
    }

    /// Look up a user by the email join key.
    pub fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .inner
            .users
            .iter()
            .find(|entry| entry.doc.email == email)
            .map(|entry| entry.doc.clone()))
    }

    pub fn upsert_user(&self, user: &User) -> Result<(), AppError> {
        self.upsert_ordered(&self.inner.users, &user.id, user.clone());
        Ok(())
    }

    pub fn delete_user(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.inner.users.remove(id).is_some())
    }

    // ─── Team Operations ─────────────────────────────────────────

    pub fn list_teams(&self) -> Result<Vec<Team>, AppError> {
        Ok(Self::list_ordered(&self.inner.teams))
    }

    pub fn get_team(&self, id: &str) -> Result<Option<Team>, AppError> {
        Ok(self.inner.teams.get(id).map(|entry| entry.doc.clone()))
    }

    pub fn find_team_by_name(&self, name: &str) -> Result<Option<Team>, AppError> {
        Ok(self
            .inner
            .teams
            .iter()
            .find(|entry| entry.doc.name == name)
            .map(|entry| entry.doc.clone()))
    }

    pub fn upsert_team(&self, team: &Team) -> Result<(), AppError> {
        self.upsert_ordered(&self.inner.teams, &team.id, team.clone());
        Ok(())
    }

    pub fn delete_team(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.inner.teams.remove(id).is_some())
    }

    /// All users whose team field equals the given team name.
    pub fn users_for_team(&self, team_name: &str) -> Result<Vec<User>, AppError> {
        Ok(Self::list_ordered(&self.inner.users)
            .into_iter()
            .filter(|user| user.team == team_name)
            .collect())
    }

    // ─── Activity Operations ─────────────────────────────────────

    pub fn list_activities(&self) -> Result<Vec<Activity>, AppError> {
        Ok(Self::list_ordered(&self.inner.activities))
    }

    pub fn get_activity(&self, id: &str) -> Result<Option<Activity>, AppError> {
        Ok(self.inner.activities.get(id).map(|entry| entry.doc.clone()))
    }

    pub fn upsert_activity(&self, activity: &Activity) -> Result<(), AppError> {
        self.upsert_ordered(&self.inner.activities, &activity.id, activity.clone());
        Ok(())
    }

    pub fn delete_activity(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.inner.activities.remove(id).is_some())
    }

    /// All activities for a user, most recent first.
    ///
    /// RFC3339 timestamps with a `Z` suffix sort lexicographically.
    pub fn activities_for_user(&self, email: &str) -> Result<Vec<Activity>, AppError> {
        let mut activities: Vec<Activity> = Self::list_ordered(&self.inner.activities)
            .into_iter()
            .filter(|activity| activity.user_email == email)
            .collect();
        activities.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(activities)
    }

    /// Most recent activities across all users.
    pub fn recent_activities(&self, limit: usize) -> Result<Vec<Activity>, AppError> {
        let mut activities = Self::list_ordered(&self.inner.activities);
        activities.sort_by(|a, b| b.date.cmp(&a.date));
        activities.truncate(limit);
        Ok(activities)
    }

    // ─── Leaderboard Operations ──────────────────────────────────

    /// The current snapshot in rank order.
    pub fn list_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, AppError> {
        let mut entries = Self::list_ordered(&self.inner.leaderboard);
        entries.sort_by_key(|entry| entry.rank);
        Ok(entries)
    }

    pub fn get_leaderboard_entry(&self, id: &str) -> Result<Option<LeaderboardEntry>, AppError> {
        Ok(self
            .inner
            .leaderboard
            .iter()
            .find(|entry| entry.doc.id == id)
            .map(|entry| entry.doc.clone()))
    }

    /// Swap in a freshly computed snapshot, keyed by user email.
    pub fn replace_leaderboard(&self, entries: &[LeaderboardEntry]) -> Result<(), AppError> {
        self.inner.leaderboard.clear();
        for entry in entries {
            self.upsert_ordered(&self.inner.leaderboard, &entry.user_email, entry.clone());
        }
        Ok(())
    }

    // ─── Workout Operations ──────────────────────────────────────

    pub fn list_workouts(&self) -> Result<Vec<Workout>, AppError> {
        Ok(Self::list_ordered(&self.inner.workouts))
    }

    pub fn get_workout(&self, id: &str) -> Result<Option<Workout>, AppError> {
        Ok(self.inner.workouts.get(id).map(|entry| entry.doc.clone()))
    }

    pub fn upsert_workout(&self, workout: &Workout) -> Result<(), AppError> {
        self.upsert_ordered(&self.inner.workouts, &workout.id, workout.clone());
        Ok(())
    }

    pub fn delete_workout(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.inner.workouts.remove(id).is_some())
    }

    pub fn workouts_by_fitness_level(
        &self,
        level: FitnessLevel,
    ) -> Result<Vec<Workout>, AppError> {
        Ok(Self::list_ordered(&self.inner.workouts)
            .into_iter()
            .filter(|workout| workout.fitness_level == level)
            .collect())
    }

    pub fn workouts_by_category(&self, category: &str) -> Result<Vec<Workout>, AppError> {
        Ok(Self::list_ordered(&self.inner.workouts)
            .into_iter()
            .filter(|workout| workout.category == category)
            .collect())
    }

    // ─── Maintenance ─────────────────────────────────────────────

    /// Clear every collection (used by the seed routine).
    pub fn clear_all(&self) -> Result<(), AppError> {
        self.inner.users.clear();
        self.inner.teams.clear();
        self.inner.activities.clear();
        self.inner.leaderboard.clear();
        self.inner.workouts.clear();
        Ok(())
    }
}
