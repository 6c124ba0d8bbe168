//! Tests for the get_people endpoint.
//!
//! This module verifies the get_people endpoint's behavior, including list
//! retrieval with various person counts and error handling for database
//! issues.

use axum::{body::to_bytes, extract::State, http::StatusCode, response::IntoResponse};
use holocron::controller::person::get_people;
use serde_json::json;

use super::*;

/// Tests successful response with an empty catalog.
///
/// Verifies that the get_people endpoint returns a 200 OK response with an
/// empty JSON array when no people exist.
///
/// Expected: Ok with 200 OK response and empty array body
#[tokio::test]
async fn success_with_empty_list() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_people(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(payload, json!([]));

    Ok(())
}

/// Tests successful response with every stored person.
///
/// Verifies that the get_people endpoint returns a 200 OK response containing
/// all people in storage order, without their internal home world foreign
/// keys.
///
/// Expected: Ok with 200 OK response listing both people
#[tokio::test]
async fn success_with_all_people() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let planet_model = test.catalog().insert_planet("Tatooine").await?;
    let person_one = test
        .catalog()
        .insert_person("Luke Skywalker", planet_model.id)
        .await?;
    let person_two = test
        .catalog()
        .insert_person("Anakin Skywalker", planet_model.id)
        .await?;

    let result = get_people(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        payload,
        json!([
            {
                "id": person_one.id,
                "name": "Luke Skywalker",
                "skin_color": "fair"
            },
            {
                "id": person_two.id,
                "name": "Anakin Skywalker",
                "skin_color": "fair"
            }
        ])
    );

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Verifies that the get_people endpoint returns a 500 INTERNAL SERVER ERROR
/// response when required database tables don't exist.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_people(State(test.to_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
