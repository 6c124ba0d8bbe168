//! Tests for the get_person endpoint.
//!
//! This module verifies the get_person endpoint's behavior, including
//! successful single-person retrieval, the not-found response for unknown IDs,
//! and error handling for database issues.

use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::controller::person::get_person;
use serde_json::json;

use super::*;

/// Tests successful response for an existing person.
///
/// Verifies that the get_person endpoint returns a 200 OK response with the
/// person's public attributes, omitting the home world foreign key.
///
/// Expected: Ok with 200 OK response and the person body
#[tokio::test]
async fn success_with_existing_person() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let planet_model = test.catalog().insert_planet("Naboo").await?;
    let person_model = test
        .catalog()
        .insert_person("Padmé Amidala", planet_model.id)
        .await?;

    let result = get_person(State(test.to_app_state()), Path(person_model.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        payload,
        json!({
            "id": person_model.id,
            "name": "Padmé Amidala",
            "skin_color": "fair"
        })
    );

    Ok(())
}

/// Tests the not-found response for an unknown person ID.
///
/// Verifies that the get_person endpoint returns a 404 NOT FOUND response with
/// the contract's error body when no person has the requested ID.
///
/// Expected: Ok with 404 NOT_FOUND response and error body
#[tokio::test]
async fn not_found_for_missing_person() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let nonexistent_person_id = 1;
    let result = get_person(State(test.to_app_state()), Path(nonexistent_person_id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(payload, json!({ "error": "Personaje no encontrado" }));

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Verifies that the get_person endpoint returns a 500 INTERNAL SERVER ERROR
/// response when required database tables don't exist.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let person_id = 1;
    let result = get_person(State(test.to_app_state()), Path(person_id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
