use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        planet::{CreatePlanetDto, PlanetDto, UpdatePlanetDto},
    },
    server::{
        error::AppError,
        model::planet::{CreatePlanetParams, UpdatePlanetParams},
        service::planet::PlanetService,
        state::AppState,
        util::{json::ApiJson, path::ApiPath},
    },
};

/// Tag for grouping planet endpoints in OpenAPI documentation
pub static PLANET_TAG: &str = "planet";

/// List all planets.
///
/// # Returns
/// - `200 OK` - Every planet ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Successfully retrieved planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let planets = PlanetService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(planets.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a planet by ID.
///
/// # Returns
/// - `200 OK` - The planet
/// - `404 Not Found` - No planet with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let planet = PlanetService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(planet.into_dto())))
}

/// Create a planet.
///
/// Every field is required and `uid` must be unique.
///
/// # Returns
/// - `201 Created` - The created planet
/// - `400 Bad Request` - Missing field, malformed body or uid already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/planets",
    tag = PLANET_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 201, description = "Successfully created planet", body = PlanetDto),
        (status = 400, description = "Invalid or duplicate planet data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreatePlanetDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreatePlanetParams::from_dto(payload)?;

    let planet = PlanetService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(planet.into_dto())))
}

/// Update a planet.
///
/// # Returns
/// - `200 OK` - The updated planet
/// - `400 Bad Request` - Malformed body or uid already taken
/// - `404 Not Found` - No planet with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    request_body = UpdatePlanetDto,
    responses(
        (status = 200, description = "Successfully updated planet", body = PlanetDto),
        (status = 400, description = "Invalid or duplicate planet data", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_planet(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdatePlanetDto>,
) -> Result<impl IntoResponse, AppError> {
    let planet = PlanetService::new(&state.db)
        .update(id, UpdatePlanetParams::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(planet.into_dto())))
}

/// Delete a planet.
///
/// Characters from the planet keep existing with no homeworld.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No planet with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted planet", body = MessageDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    PlanetService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Planet deleted successfully"))))
}
