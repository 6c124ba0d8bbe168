//! Tests for the get_users endpoint.
//!
//! This module verifies the get_users endpoint's behavior, including list
//! retrieval, the omission of password data from responses, and error handling
//! for database issues.

use axum::{body::to_bytes, extract::State, http::StatusCode, response::IntoResponse};
use holocron::controller::user::get_users;
use serde_json::json;

use super::*;

/// Tests successful response with an empty user table.
///
/// Verifies that the get_users endpoint returns a 200 OK response with an
/// empty JSON array when no users are registered.
///
/// Expected: Ok with 200 OK response and empty array body
#[tokio::test]
async fn success_with_empty_list() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_users(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(payload, json!([]));

    Ok(())
}

/// Tests that user responses never include password data.
///
/// Verifies that the get_users endpoint serializes only id, email, and
/// is_active for each user; the stored password hash must not appear anywhere
/// in the response body.
///
/// Expected: Ok with 200 OK response containing exactly the public fields
#[tokio::test]
async fn response_omits_password_field() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let user_one = test.user().insert_user("luke@rebellion.example").await?;
    let user_two = test.user().insert_user("leia@rebellion.example").await?;

    let result = get_users(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        payload,
        json!([
            {
                "id": user_one.id,
                "email": "luke@rebellion.example",
                "is_active": true
            },
            {
                "id": user_two.id,
                "email": "leia@rebellion.example",
                "is_active": true
            }
        ])
    );

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Verifies that the get_users endpoint returns a 500 INTERNAL SERVER ERROR
/// response when required database tables don't exist.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_users(State(test.to_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
