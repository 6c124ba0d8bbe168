use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::Error,
    model::{
        api::{ErrorDto, MessageDto},
        app::AppState,
        favorite::{FavoritePersonDto, FavoritePlanetDto},
    },
    service::favorite::FavoriteService,
};

pub static FAVORITE_TAG: &str = "favorite";

/// Add a planet to a user's favorites
#[utoipa::path(
    post,
    path = "/favorite/{user_id}/planet/{planet_id}",
    tag = FAVORITE_TAG,
    responses(
        (status = 201, description = "Favorite entry created", body = FavoritePlanetDto),
        (status = 400, description = "Planet is already favorited by the user", body = ErrorDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    let favorite = favorite_service.add_planet(user_id, planet_id).await?;

    Ok((StatusCode::CREATED, axum::Json(favorite)).into_response())
}

/// Remove a planet from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/{user_id}/planet/{planet_id}",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "Favorite entry deleted", body = MessageDto),
        (status = 404, description = "No favorite entry exists for the pair", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service.remove_planet(user_id, planet_id).await?;

    Ok((
        StatusCode::OK,
        axum::Json(MessageDto {
            message: "Favorito de planeta eliminado correctamente".to_string(),
        }),
    )
        .into_response())
}

/// Add a person to a user's favorites
#[utoipa::path(
    post,
    path = "/favorite/{user_id}/person/{person_id}",
    tag = FAVORITE_TAG,
    responses(
        (status = 201, description = "Favorite entry created", body = FavoritePersonDto),
        (status = 400, description = "Person is already favorited by the user", body = ErrorDto),
        (status = 404, description = "User or person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_person(
    State(state): State<AppState>,
    Path((user_id, person_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    let favorite = favorite_service.add_person(user_id, person_id).await?;

    Ok((StatusCode::CREATED, axum::Json(favorite)).into_response())
}

/// Remove a person from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/{user_id}/person/{person_id}",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "Favorite entry deleted", body = MessageDto),
        (status = 404, description = "No favorite entry exists for the pair", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_person(
    State(state): State<AppState>,
    Path((user_id, person_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service.remove_person(user_id, person_id).await?;

    Ok((
        StatusCode::OK,
        axum::Json(MessageDto {
            message: "Favorito de personaje eliminado correctamente".to_string(),
        }),
    )
        .into_response())
}
