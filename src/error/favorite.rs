use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Expected failures of the favorite management operations.
///
/// `Display` text is English for the logs; the `IntoResponse` mapping returns
/// the Spanish client-facing messages the API contract promises.
#[derive(Error, Debug)]
pub enum FavoriteError {
    /// No user row exists for the given ID.
    #[error("User ID {0} not found")]
    UserNotFound(i32),
    /// No planet row exists for the given ID.
    #[error("Planet ID {0} not found")]
    PlanetNotFound(i32),
    /// No person row exists for the given ID.
    #[error("Person ID {0} not found")]
    PersonNotFound(i32),
    /// The user already has a favorite entry for this planet.
    #[error("Planet ID {1} is already favorited by user ID {0}")]
    PlanetAlreadyFavorited(i32, i32),
    /// The user already has a favorite entry for this person.
    #[error("Person ID {1} is already favorited by user ID {0}")]
    PersonAlreadyFavorited(i32, i32),
    /// The user has no favorite entry for this planet to remove.
    #[error("User ID {0} has no favorite entry for planet ID {1}")]
    FavoritePlanetNotFound(i32, i32),
    /// The user has no favorite entry for this person to remove.
    #[error("User ID {0} has no favorite entry for person ID {1}")]
    FavoritePersonNotFound(i32, i32),
}

impl FavoriteError {
    fn error_response(status: StatusCode, message: &str) -> Response {
        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotFound(_) => {
                Self::error_response(StatusCode::NOT_FOUND, "Usuario no encontrado")
            }
            Self::PlanetNotFound(_) => {
                Self::error_response(StatusCode::NOT_FOUND, "Planeta no encontrado")
            }
            Self::PersonNotFound(_) => {
                Self::error_response(StatusCode::NOT_FOUND, "Personaje no encontrado")
            }
            Self::PlanetAlreadyFavorited(..) => {
                Self::error_response(StatusCode::BAD_REQUEST, "El planeta ya está en favoritos")
            }
            Self::PersonAlreadyFavorited(..) => {
                Self::error_response(StatusCode::BAD_REQUEST, "El personaje ya está en favoritos")
            }
            Self::FavoritePlanetNotFound(..) => {
                Self::error_response(StatusCode::NOT_FOUND, "Favorito de planeta no encontrado")
            }
            Self::FavoritePersonNotFound(..) => {
                Self::error_response(StatusCode::NOT_FOUND, "Favorito de personaje no encontrado")
            }
        }
    }
}
