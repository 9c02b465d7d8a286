// SPDX-License-Identifier: MIT

//! Team endpoint integration tests.

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

mod common;

fn marvel_payload() -> serde_json::Value {
    json!({
        "name": "Team Marvel",
        "description": "Earth's Mightiest Heroes unite for fitness!",
        "members_count": 6
    })
}

#[tokio::test]
async fn test_create_and_list_teams() {
    let (app, _state) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::json_request("POST", "/api/teams", &marvel_payload()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(common::get_request("/api/teams"))
        .await
        .unwrap();
    let teams = common::body_json(response).await;
    assert_eq!(teams.as_array().unwrap().len(), 1);
    assert_eq!(teams[0]["name"], "Team Marvel");
    assert_eq!(teams[0]["members_count"], 6);
}

#[tokio::test]
async fn test_duplicate_team_name_rejected() {
    let (app, _state) = common::create_test_app();

    app.clone()
        .oneshot(common::json_request("POST", "/api/teams", &marvel_payload()))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(common::json_request("POST", "/api/teams", &marvel_payload()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_team_members_matched_by_name() {
    let (app, _state) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::json_request("POST", "/api/teams", &marvel_payload()))
        .await
        .unwrap();
    let team = common::body_json(response).await;
    let team_id = team["id"].as_str().unwrap().to_string();

    for (name, email, team_name) in [
        ("Tony Stark", "ironman@marvel.com", "Team Marvel"),
        ("Clark Kent", "superman@dc.com", "Team DC"),
    ] {
        let user = json!({
            "name": name,
            "email": email,
            "team": team_name,
            "fitness_level": "expert"
        });
        app.clone()
            .oneshot(common::json_request("POST", "/api/users", &user))
            .await
            .unwrap();
    }

    let response = app
        .clone()
        .oneshot(common::get_request(&format!("/api/teams/{}/members", team_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let members = common::body_json(response).await;
    let entries = members.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "Tony Stark");
}

#[tokio::test]
async fn test_members_of_missing_team_returns_not_found() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(common::get_request("/api/teams/does-not-exist/members"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_and_delete_team() {
    let (app, _state) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::json_request("POST", "/api/teams", &marvel_payload()))
        .await
        .unwrap();
    let team = common::body_json(response).await;
    let id = team["id"].as_str().unwrap().to_string();

    let update = json!({
        "name": "Team Marvel",
        "description": "Updated description",
        "members_count": 7
    });
    let response = app
        .clone()
        .oneshot(common::json_request(
            "PUT",
            &format!("/api/teams/{}", id),
            &update,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = common::body_json(response).await;
    assert_eq!(updated["members_count"], 7);

    let response = app
        .clone()
        .oneshot(
            axum::http::Request::builder()
                .method("DELETE")
                .uri(format!("/api/teams/{}", id))
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(common::get_request(&format!("/api/teams/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
