//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI
//! documentation using utoipa. All API endpoints are registered here with
//! their OpenAPI specifications, and Swagger UI is configured to provide
//! interactive API documentation at `/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /person` - List all people
/// - `GET /person/{person_id}` - Get a single person
/// - `GET /planets` - List all planets
/// - `GET /planets/{planet_id}` - Get a single planet
/// - `GET /users` - List all users
/// - `GET /users/favorites/{user_id}` - Get a user's favorites
/// - `POST /favorite/{user_id}/planet/{planet_id}` - Favorite a planet
/// - `DELETE /favorite/{user_id}/planet/{planet_id}` - Unfavorite a planet
/// - `POST /favorite/{user_id}/person/{person_id}` - Favorite a person
/// - `DELETE /favorite/{user_id}/person/{person_id}` - Unfavorite a person
///
/// The OpenAPI specification is served at `/docs/openapi.json` and Swagger UI
/// at `/docs`.
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be merged
/// into the main application router.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Holocron catalog API"), tags(
        (name = controller::planet::PLANET_TAG, description = "Planet catalog routes"),
        (name = controller::person::PERSON_TAG, description = "Person catalog routes"),
        (name = controller::user::USER_TAG, description = "User account routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite management routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::person::get_people))
        .routes(routes!(controller::person::get_person))
        .routes(routes!(controller::planet::get_planets))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::remove_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_person,
            controller::favorite::remove_favorite_person
        ))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api));

    routes
}
