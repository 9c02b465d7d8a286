// SPDX-License-Identifier: MIT

//! Sample data seeding.
//!
//! Clears every collection and repopulates it with the demo dataset:
//! two superhero teams, twelve users, a randomized batch of activities
//! per user, and a fixed workout catalog, then rebuilds the leaderboard.

use chrono::{Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::db::MemoryDb;
use crate::error::AppError;
use crate::models::{Activity, Exercise, FitnessLevel, Team, User, Workout};
use crate::services::leaderboard;
use crate::time_utils::{format_utc_rfc3339, now_rfc3339};

const ACTIVITY_TYPES: &[&str] = &[
    "Running",
    "Cycling",
    "Swimming",
    "Weight Training",
    "Yoga",
    "HIIT",
    "Boxing",
    "Martial Arts",
];

/// Activity types that carry a distance.
const DISTANCE_TYPES: &[&str] = &["Running", "Cycling", "Swimming"];

const TEAMS: &[(&str, &str, u32)] = &[
    (
        "Team Marvel",
        "Earth's Mightiest Heroes unite for fitness!",
        6,
    ),
    (
        "Team DC",
        "Justice League assembles for peak performance!",
        6,
    ),
];

const USERS: &[(&str, &str, &str, FitnessLevel)] = &[
    ("Tony Stark", "ironman@marvel.com", "Team Marvel", FitnessLevel::Advanced),
    ("Steve Rogers", "captainamerica@marvel.com", "Team Marvel", FitnessLevel::Expert),
    ("Natasha Romanoff", "blackwidow@marvel.com", "Team Marvel", FitnessLevel::Expert),
    ("Bruce Banner", "hulk@marvel.com", "Team Marvel", FitnessLevel::Intermediate),
    ("Thor Odinson", "thor@marvel.com", "Team Marvel", FitnessLevel::Expert),
    ("Peter Parker", "spiderman@marvel.com", "Team Marvel", FitnessLevel::Advanced),
    ("Clark Kent", "superman@dc.com", "Team DC", FitnessLevel::Expert),
    ("Bruce Wayne", "batman@dc.com", "Team DC", FitnessLevel::Expert),
    ("Diana Prince", "wonderwoman@dc.com", "Team DC", FitnessLevel::Expert),
    ("Barry Allen", "flash@dc.com", "Team DC", FitnessLevel::Advanced),
    ("Arthur Curry", "aquaman@dc.com", "Team DC", FitnessLevel::Advanced),
    ("Hal Jordan", "greenlantern@dc.com", "Team DC", FitnessLevel::Advanced),
];

/// Counts of what a seed run created.
#[derive(Debug, Clone, Copy)]
pub struct SeedSummary {
    pub teams: usize,
    pub users: usize,
    pub activities: usize,
    pub leaderboard_entries: usize,
    pub workouts: usize,
}

/// Clear all collections and repopulate them with the demo dataset.
pub fn populate(db: &MemoryDb) -> Result<SeedSummary, AppError> {
    tracing::info!("Clearing existing data");
    db.clear_all()?;

    tracing::info!("Creating teams");
    for (name, description, members_count) in TEAMS {
        db.upsert_team(&Team {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            members_count: *members_count,
            created_at: now_rfc3339(),
        })?;
    }

    tracing::info!("Creating users");
    for (name, email, team, fitness_level) in USERS {
        db.upsert_user(&User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            team: team.to_string(),
            fitness_level: *fitness_level,
            created_at: now_rfc3339(),
        })?;
    }

    tracing::info!("Creating activities");
    let mut rng = rand::thread_rng();
    let mut activity_count = 0;

    for (name, email, _, _) in USERS {
        // 5-10 activities per user, spread over the last 30 days
        let num_activities = rng.gen_range(5..=10);
        for _ in 0..num_activities {
            let days_ago = rng.gen_range(0..=30);
            let date = Utc::now() - Duration::days(days_ago);
            let activity_type = *ACTIVITY_TYPES.choose(&mut rng).unwrap_or(&"Running");
            let duration: u32 = rng.gen_range(20..=120);
            let calories = duration * rng.gen_range(5..=12);
            let distance_km = if DISTANCE_TYPES.contains(&activity_type) {
                Some((rng.gen_range(1.0..15.0f64) * 100.0).round() / 100.0)
            } else {
                None
            };

            db.upsert_activity(&Activity {
                id: Uuid::new_v4().to_string(),
                user_email: email.to_string(),
                activity_type: activity_type.to_string(),
                duration_minutes: duration,
                calories_burned: calories,
                distance_km,
                date: format_utc_rfc3339(date),
                notes: Some(format!("{} session - {}", activity_type, name)),
            })?;
            activity_count += 1;
        }
    }

    tracing::info!("Creating leaderboard entries");
    let leaderboard_entries = leaderboard::refresh(db)?;

    tracing::info!("Creating workouts");
    let workouts = workout_catalog();
    let workout_count = workouts.len();
    for workout in &workouts {
        db.upsert_workout(workout)?;
    }

    let summary = SeedSummary {
        teams: TEAMS.len(),
        users: USERS.len(),
        activities: activity_count,
        leaderboard_entries,
        workouts: workout_count,
    };

    tracing::info!(
        teams = summary.teams,
        users = summary.users,
        activities = summary.activities,
        leaderboard_entries = summary.leaderboard_entries,
        workouts = summary.workouts,
        "Seed data populated"
    );

    Ok(summary)
}

fn reps(name: &str, sets: u32, reps: u32) -> Exercise {
    Exercise {
        name: name.to_string(),
        sets,
        reps: Some(reps),
        duration_seconds: None,
    }
}

fn timed(name: &str, sets: u32, duration_seconds: u32) -> Exercise {
    Exercise {
        name: name.to_string(),
        sets,
        reps: None,
        duration_seconds: Some(duration_seconds),
    }
}

fn workout_catalog() -> Vec<Workout> {
    let catalog = [
        (
            "Hero Training Basics",
            "Essential exercises for beginners starting their hero journey",
            FitnessLevel::Beginner,
            30,
            "Strength",
            vec![
                reps("Push-ups", 3, 10),
                reps("Squats", 3, 15),
                timed("Plank", 3, 30),
            ],
        ),
        (
            "Avenger Cardio Blast",
            "High-intensity cardio to match the Avengers",
            FitnessLevel::Intermediate,
            45,
            "Cardio",
            vec![
                reps("Burpees", 4, 15),
                reps("Mountain Climbers", 4, 20),
                reps("Jump Squats", 4, 15),
            ],
        ),
        (
            "Superman Strength",
            "Advanced strength training fit for the Man of Steel",
            FitnessLevel::Advanced,
            60,
            "Strength",
            vec![
                reps("Deadlifts", 5, 8),
                reps("Bench Press", 5, 8),
                reps("Pull-ups", 5, 10),
            ],
        ),
        (
            "Flash Speed Training",
            "Speed and agility drills inspired by the Fastest Man Alive",
            FitnessLevel::Advanced,
            40,
            "Agility",
            vec![
                timed("Sprint Intervals", 8, 30),
                reps("Ladder Drills", 5, 10),
                reps("Box Jumps", 4, 12),
            ],
        ),
        (
            "Wonder Woman Warrior",
            "Warrior-inspired full body workout",
            FitnessLevel::Intermediate,
            50,
            "Full Body",
            vec![
                reps("Lunges", 4, 12),
                reps("Push-ups", 4, 15),
                reps("Kettlebell Swings", 4, 20),
            ],
        ),
        (
            "Spider-Man Mobility",
            "Flexibility and mobility for web-slinging action",
            FitnessLevel::Beginner,
            35,
            "Flexibility",
            vec![
                timed("Dynamic Stretching", 2, 300),
                timed("Yoga Flow", 3, 180),
                timed("Foam Rolling", 1, 600),
            ],
        ),
    ];

    catalog
        .into_iter()
        .map(
            |(name, description, fitness_level, duration_minutes, category, exercises)| Workout {
                id: Uuid::new_v4().to_string(),
                name: name.to_string(),
                description: description.to_string(),
                fitness_level,
                duration_minutes,
                category: category.to_string(),
                exercises,
            },
        )
        .collect()
}
