use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    data::catalog::person::PersonRepository,
    error::Error,
    model::{api::ErrorDto, app::AppState, catalog::PersonDto},
};

pub static PERSON_TAG: &str = "person";

/// Get all people in the catalog
#[utoipa::path(
    get,
    path = "/person",
    tag = PERSON_TAG,
    responses(
        (status = 200, description = "Success when retrieving people", body = Vec<PersonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let person_repository = PersonRepository::new(&state.db);

    let people = person_repository.get_all().await?;

    let person_dtos: Vec<PersonDto> = people.into_iter().map(PersonDto::from).collect();

    Ok((StatusCode::OK, axum::Json(person_dtos)).into_response())
}

/// Get a single person by their ID
#[utoipa::path(
    get,
    path = "/person/{person_id}",
    tag = PERSON_TAG,
    responses(
        (status = 200, description = "Success when retrieving person", body = PersonDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(person_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let person_repository = PersonRepository::new(&state.db);

    let person = if let Some(person) = person_repository.get(person_id).await? {
        person
    } else {
        return Ok((
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: "Personaje no encontrado".to_string(),
            }),
        )
            .into_response());
    };

    Ok((StatusCode::OK, axum::Json(PersonDto::from(person))).into_response())
}
