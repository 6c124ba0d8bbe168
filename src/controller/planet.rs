use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    data::catalog::planet::PlanetRepository,
    error::Error,
    model::{api::ErrorDto, app::AppState, catalog::PlanetDto},
};

pub static PLANET_TAG: &str = "planet";

/// Get all planets in the catalog
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Success when retrieving planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planet_repository = PlanetRepository::new(&state.db);

    let planets = planet_repository.get_all().await?;

    let planet_dtos: Vec<PlanetDto> = planets.into_iter().map(PlanetDto::from).collect();

    Ok((StatusCode::OK, axum::Json(planet_dtos)).into_response())
}

/// Get a single planet by its ID
#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Success when retrieving planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet_repository = PlanetRepository::new(&state.db);

    let planet = if let Some(planet) = planet_repository.get(planet_id).await? {
        planet
    } else {
        return Ok((
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: "Planeta no encontrado".to_string(),
            }),
        )
            .into_response());
    };

    Ok((StatusCode::OK, axum::Json(PlanetDto::from(planet))).into_response())
}
