//! Tests for the get_planets endpoint.
//!
//! This module verifies the get_planets endpoint's behavior, including list
//! retrieval with various planet counts and error handling for database
//! issues.

use axum::{body::to_bytes, extract::State, http::StatusCode, response::IntoResponse};
use holocron::controller::planet::get_planets;
use serde_json::json;

use super::*;

/// Tests successful response with an empty catalog.
///
/// Verifies that the get_planets endpoint returns a 200 OK response with an
/// empty JSON array when no planets exist.
///
/// Expected: Ok with 200 OK response and empty array body
#[tokio::test]
async fn success_with_empty_list() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_planets(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(payload, json!([]));

    Ok(())
}

/// Tests successful response with every stored planet.
///
/// Verifies that the get_planets endpoint returns a 200 OK response containing
/// all planets in storage order with their full attribute sets.
///
/// Expected: Ok with 200 OK response listing both planets
#[tokio::test]
async fn success_with_all_planets() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let planet_one = test.catalog().insert_planet("Tatooine").await?;
    let planet_two = test.catalog().insert_planet("Dagobah").await?;

    let result = get_planets(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        payload,
        json!([
            {
                "id": planet_one.id,
                "name": "Tatooine",
                "climate": "arid",
                "gravity": "1 standard"
            },
            {
                "id": planet_two.id,
                "name": "Dagobah",
                "climate": "arid",
                "gravity": "1 standard"
            }
        ])
    );

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Verifies that the get_planets endpoint returns a 500 INTERNAL SERVER ERROR
/// response when required database tables don't exist.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_planets(State(test.to_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
