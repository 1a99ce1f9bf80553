// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard composition: daily summary and weekly overview.

mod common;

use common::{anonymous_client, authed_client};
use chrono::NaiveDate;
use mealmate_client::error::ApiError;
use mealmate_client::services::DashboardService;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 10).unwrap()
}

fn meal_body() -> serde_json::Value {
    serde_json::json!({
        "id": 42,
        "userId": 7,
        "foodName": "Bibimbap",
        "calories": 560,
        "quantity": 1,
        "mealType": "lunch",
        "mealDate": "2026-02-10"
    })
}

fn workout_body() -> serde_json::Value {
    serde_json::json!({
        "id": 9,
        "userId": 7,
        "name": "Evening run",
        "duration": 45,
        "caloriesBurned": 420
    })
}

#[tokio::test]
async fn test_daily_summary_composes_concurrent_fetches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/meals/user/7/date/2026-02-10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([meal_body()])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/workouts/user/7/date/2026-02-10"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([workout_body()])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/meals/user/7/date/2026-02-10/calories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(560.0)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/workouts/user/7/date/2026-02-10/calories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(420.0)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/workouts/user/7/date/2026-02-10/duration"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(45)))
        .mount(&server)
        .await;

    let dashboard = DashboardService::new(authed_client(&server));
    let summary = dashboard.daily_summary(date()).await.unwrap();

    assert_eq!(summary.date, date());
    assert_eq!(summary.meals.len(), 1);
    assert_eq!(summary.workouts.len(), 1);
    assert_eq!(summary.calories_consumed, 560.0);
    assert_eq!(summary.calories_burned, 420.0);
    assert_eq!(summary.workout_minutes, 45);
    assert_eq!(summary.net_calories(), 140.0);
}

#[tokio::test]
async fn test_weekly_overview_returns_seven_days_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/meals/user/7/date/[0-9-]+/calories$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(500.0)))
        .expect(7)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/workouts/user/7/date/[0-9-]+/calories$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(200.0)))
        .expect(7)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/workouts/user/7/date/[0-9-]+/duration$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(30)))
        .expect(7)
        .mount(&server)
        .await;

    let dashboard = DashboardService::new(authed_client(&server));
    let week = dashboard.weekly_overview(date()).await.unwrap();

    assert_eq!(week.len(), 7);
    assert_eq!(week[0].date, NaiveDate::from_ymd_opt(2026, 2, 4).unwrap());
    assert_eq!(week[6].date, date());
    for day in &week {
        assert_eq!(day.calories_consumed, 500.0);
        assert_eq!(day.calories_burned, 200.0);
        assert_eq!(day.workout_minutes, 30);
    }
}

#[tokio::test]
async fn test_dashboard_requires_a_session() {
    let server = MockServer::start().await;
    let dashboard = DashboardService::new(anonymous_client(&server));

    let result = dashboard.daily_summary(date()).await;

    assert!(matches!(result, Err(ApiError::Unauthenticated)));
    assert!(
        server.received_requests().await.unwrap().is_empty(),
        "identity comes from the session, never from a placeholder id"
    );
}
