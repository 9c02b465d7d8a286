// SPDX-License-Identifier: MIT

//! Leaderboard endpoint integration tests, driven by the seeded demo
//! dataset and hand-built tie scenarios.

use axum::http::StatusCode;
use octofit_tracker::services::seed;
use serde_json::json;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_seeded_leaderboard_is_fully_ranked() {
    let (app, state) = common::create_test_app();
    seed::populate(&state.db).unwrap();

    let response = app
        .clone()
        .oneshot(common::get_request("/api/leaderboard"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let board = common::body_json(response).await;
    let entries = board.as_array().unwrap();
    assert_eq!(entries.len(), 12);

    // Dense ranks 1..12 in order, calories descending.
    for (position, entry) in entries.iter().enumerate() {
        assert_eq!(entry["rank"], (position + 1) as u64);
    }
    for pair in entries.windows(2) {
        assert!(pair[0]["total_calories"].as_u64() >= pair[1]["total_calories"].as_u64());
    }
}

#[tokio::test]
async fn test_top_limit_returns_first_ranks() {
    let (app, state) = common::create_test_app();
    seed::populate(&state.db).unwrap();

    let response = app
        .clone()
        .oneshot(common::get_request("/api/leaderboard/top?limit=3"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let top = common::body_json(response).await;
    let entries = top.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["rank"], 1);
    assert_eq!(entries[1]["rank"], 2);
    assert_eq!(entries[2]["rank"], 3);
}

#[tokio::test]
async fn test_by_team_preserves_rank_order() {
    let (app, state) = common::create_test_app();
    seed::populate(&state.db).unwrap();

    let response = app
        .clone()
        .oneshot(common::get_request(
            "/api/leaderboard/by_team?team=Team%20Marvel",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let filtered = common::body_json(response).await;
    let entries = filtered.as_array().unwrap();
    assert_eq!(entries.len(), 6);
    for entry in entries {
        assert_eq!(entry["team"], "Team Marvel");
    }
    for pair in entries.windows(2) {
        assert!(pair[0]["rank"].as_u64() < pair[1]["rank"].as_u64());
    }
}

#[tokio::test]
async fn test_by_team_requires_parameter() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(common::get_request("/api/leaderboard/by_team"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_equal_totals_get_distinct_ranks_by_email() {
    let (app, _state) = common::create_test_app();

    for (name, email) in [
        ("Zed", "zed@example.com"),
        ("Ann", "ann@example.com"),
    ] {
        let user = json!({
            "name": name,
            "email": email,
            "team": "Team Tie",
            "fitness_level": "intermediate"
        });
        app.clone()
            .oneshot(common::json_request("POST", "/api/users", &user))
            .await
            .unwrap();

        let activity = json!({
            "user_email": email,
            "activity_type": "Boxing",
            "duration_minutes": 50,
            "calories_burned": 500,
            "date": "2025-06-10T08:00:00Z"
        });
        app.clone()
            .oneshot(common::json_request("POST", "/api/activities", &activity))
            .await
            .unwrap();
    }

    let response = app
        .clone()
        .oneshot(common::get_request("/api/leaderboard"))
        .await
        .unwrap();
    let board = common::body_json(response).await;
    let entries = board.as_array().unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["user_email"], "ann@example.com");
    assert_eq!(entries[0]["rank"], 1);
    assert_eq!(entries[1]["user_email"], "zed@example.com");
    assert_eq!(entries[1]["rank"], 2);
}

#[tokio::test]
async fn test_leaderboard_entry_lookup() {
    let (app, state) = common::create_test_app();
    seed::populate(&state.db).unwrap();

    let board = state.db.list_leaderboard().unwrap();
    let id = board[0].id.clone();

    let response = app
        .clone()
        .oneshot(common::get_request(&format!("/api/leaderboard/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let entry = common::body_json(response).await;
    assert_eq!(entry["rank"], 1);

    let response = app
        .clone()
        .oneshot(common::get_request("/api/leaderboard/does-not-exist"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
