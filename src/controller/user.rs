use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    data::user::UserRepository,
    error::Error,
    model::{api::ErrorDto, app::AppState, favorite::UserFavoritesDto, user::UserDto},
    service::favorite::FavoriteService,
};

pub static USER_TAG: &str = "user";

/// Get all registered users
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when retrieving users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let user_repository = UserRepository::new(&state.db);

    let users = user_repository.get_all().await?;

    let user_dtos: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();

    Ok((StatusCode::OK, axum::Json(user_dtos)).into_response())
}

/// Get a user's favorite planets and people
///
/// A user ID without any favorites, including one that does not exist, yields
/// empty lists rather than a failure.
#[utoipa::path(
    get,
    path = "/users/favorites/{user_id}",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when retrieving user favorites", body = UserFavoritesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    let favorites = favorite_service.get_for_user(user_id).await?;

    Ok((StatusCode::OK, axum::Json(favorites)).into_response())
}
