use criterion::{black_box, criterion_group, criterion_main, Criterion};
use octofit_tracker::models::{Activity, FitnessLevel, User};
use octofit_tracker::services::leaderboard;
use uuid::Uuid;

fn make_dataset(num_users: usize, activities_per_user: usize) -> (Vec<User>, Vec<Activity>) {
    let users: Vec<User> = (0..num_users)
        .map(|i| User {
            id: Uuid::new_v4().to_string(),
            name: format!("User {}", i),
            email: format!("user{}@example.com", i),
            team: if i % 2 == 0 { "Team Marvel" } else { "Team DC" }.to_string(),
            fitness_level: FitnessLevel::Intermediate,
            created_at: "2025-06-01T00:00:00Z".to_string(),
        })
        .collect();

    let activities: Vec<Activity> = users
        .iter()
        .flat_map(|user| {
            (0..activities_per_user).map(move |j| Activity {
                id: Uuid::new_v4().to_string(),
                user_email: user.email.clone(),
                activity_type: "Running".to_string(),
                duration_minutes: 30 + (j as u32 % 90),
                calories_burned: 200 + (j as u32 * 17 % 800),
                distance_km: if j % 3 == 0 { Some(5.0 + j as f64) } else { None },
                date: "2025-06-10T08:00:00Z".to_string(),
                notes: None,
            })
        })
        .collect();

    (users, activities)
}

fn benchmark_rebuild_and_rank(c: &mut Criterion) {
    let (users, activities) = make_dataset(100, 50);

    let mut group = c.benchmark_group("leaderboard");

    group.bench_function("rebuild_100_users_5k_activities", |b| {
        b.iter(|| leaderboard::rebuild(black_box(&users), black_box(&activities)))
    });

    group.bench_function("rebuild_and_rank_100_users_5k_activities", |b| {
        b.iter(|| leaderboard::rank(leaderboard::rebuild(black_box(&users), black_box(&activities))))
    });

    group.finish();
}

criterion_group!(benches, benchmark_rebuild_and_rank);
criterion_main!(benches);
