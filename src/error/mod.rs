//! Error types for the Holocron server application.
//!
//! The top-level [`Error`] aggregates domain errors and database failures into
//! a single type usable with the `?` operator throughout the service and
//! controller layers. Every error implements `IntoResponse`; anything without
//! a specific HTTP mapping falls back to [`InternalServerError`], which logs
//! the cause and returns a generic 500 body so internals never leak to
//! clients.

pub mod config;
pub mod favorite;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{error::favorite::FavoriteError, model::api::ErrorDto};

/// Main error type for the Holocron server application.
#[derive(Error, Debug)]
pub enum Error {
    /// Favorite management error (missing user/target, duplicate favorite).
    #[error(transparent)]
    FavoriteError(#[from] FavoriteError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::FavoriteError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error message for debugging but returns a generic message to
/// the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
