// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use mealmate_client::error::ApiError;
use reqwest::StatusCode;

#[test]
fn test_status_mapping() {
    assert!(matches!(
        ApiError::from_status(StatusCode::BAD_REQUEST, "bad".into()),
        ApiError::InvalidRequest(_)
    ));
    assert!(matches!(
        ApiError::from_status(StatusCode::UNAUTHORIZED, String::new()),
        ApiError::Unauthenticated
    ));
    assert!(matches!(
        ApiError::from_status(StatusCode::FORBIDDEN, String::new()),
        ApiError::Forbidden(_)
    ));
    assert!(matches!(
        ApiError::from_status(StatusCode::NOT_FOUND, String::new()),
        ApiError::NotFound(_)
    ));
    assert!(matches!(
        ApiError::from_status(StatusCode::CONFLICT, String::new()),
        ApiError::Conflict(_)
    ));
    assert!(matches!(
        ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, String::new()),
        ApiError::ServerError(_)
    ));
    assert!(matches!(
        ApiError::from_status(StatusCode::BAD_GATEWAY, String::new()),
        ApiError::ServerError(_)
    ));
}

#[test]
fn test_unlisted_statuses_map_to_unexpected() {
    match ApiError::from_status(StatusCode::IM_A_TEAPOT, "teapot".into()) {
        ApiError::Unexpected { status, body } => {
            assert_eq!(status, 418);
            assert_eq!(body, "teapot");
        }
        other => panic!("expected Unexpected, got {:?}", other),
    }
}

#[test]
fn test_json_error_bodies_are_unwrapped_to_their_message() {
    let body = r#"{"message": "duplicate account", "timestamp": "2026-02-10"}"#;
    match ApiError::from_status(StatusCode::CONFLICT, body.to_string()) {
        ApiError::Conflict(detail) => assert_eq!(detail, "duplicate account"),
        other => panic!("expected Conflict, got {:?}", other),
    }

    // Non-JSON bodies pass through untouched.
    match ApiError::from_status(StatusCode::BAD_REQUEST, "plain detail".to_string()) {
        ApiError::InvalidRequest(detail) => assert_eq!(detail, "plain detail"),
        other => panic!("expected InvalidRequest, got {:?}", other),
    }
}

#[test]
fn test_predicates() {
    assert!(ApiError::NotFound("gone".into()).is_not_found());
    assert!(!ApiError::NotFound("gone".into()).is_auth_error());
    assert!(ApiError::Unauthenticated.is_auth_error());
    assert!(!ApiError::ServerError("boom".into()).is_not_found());
}

#[test]
fn test_error_messages_are_stable() {
    assert_eq!(
        ApiError::Unauthenticated.to_string(),
        "Authentication required"
    );
    assert_eq!(
        ApiError::NotFound("profile".into()).to_string(),
        "Resource not found: profile"
    );
}
