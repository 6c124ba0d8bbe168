//! End-to-end favorite lifecycle test through the router.
//!
//! This module drives the full add/duplicate/remove/re-remove sequence for a
//! planet favorite over real HTTP requests, verifying the status code and
//! exact JSON body of every step against the API contract.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use holocron::{model::app::AppState, router};
use serde_json::json;
use tower::ServiceExt;

use super::*;

async fn read_json(resp: axum::response::Response) -> serde_json::Value {
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Tests the full favorite lifecycle for a planet.
///
/// Verifies the sequence: favoriting an existing planet creates the entry,
/// favoriting it again is rejected as a duplicate, removing it succeeds with
/// the confirmation message, removing it again reports the missing entry, and
/// the user's favorites listing ends up empty.
///
/// Expected: 201, 400, 200, 404, then 200 with empty lists
#[tokio::test]
async fn planet_favorite_lifecycle() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    test.user().insert_user("luke@rebellion.example").await?;
    test.user().insert_user("leia@rebellion.example").await?;
    let user_model = test.user().insert_user("han@rebellion.example").await?;
    let planet_model = test.catalog().insert_planet("Tatooine").await?;

    let app = router::routes().with_state(test.to_app_state::<AppState>());
    let favorite_uri = format!("/favorite/{}/planet/{}", user_model.id, planet_model.id);

    // Favoriting an existing planet creates the entry
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(favorite_uri.as_str())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        read_json(resp).await,
        json!({
            "id": 1,
            "user_id": user_model.id,
            "planet_id": planet_model.id
        })
    );

    // Favoriting it again is rejected as a duplicate
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(favorite_uri.as_str())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json(resp).await,
        json!({ "error": "El planeta ya está en favoritos" })
    );

    // Removing the favorite succeeds with the confirmation message
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(favorite_uri.as_str())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        read_json(resp).await,
        json!({ "message": "Favorito de planeta eliminado correctamente" })
    );

    // Removing it again reports the missing entry
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(favorite_uri.as_str())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        read_json(resp).await,
        json!({ "error": "Favorito de planeta no encontrado" })
    );

    // The user's favorites listing ends up empty
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/users/favorites/{}", user_model.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        read_json(resp).await,
        json!({ "favorite_planets": [], "favorite_person": [] })
    );

    Ok(())
}
