//! Handlers for the `/people` endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        character::{CharacterDto, CreateCharacterDto, UpdateCharacterDto},
    },
    server::{
        error::AppError,
        model::character::{CreateCharacterParams, UpdateCharacterParams},
        service::character::CharacterService,
        state::AppState,
        util::{json::ApiJson, path::ApiPath},
    },
};

/// Tag for grouping people endpoints in OpenAPI documentation
pub static PEOPLE_TAG: &str = "people";

/// List all characters.
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_people(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let people = CharacterService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(people.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a character by ID.
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = PEOPLE_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved character", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let character = CharacterService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

/// Create a character.
///
/// Every field is required. `homeworld` may be `null` but must otherwise reference an
/// existing planet.
///
/// # Returns
/// - `201 Created` - The created character
/// - `400 Bad Request` - Missing field, malformed body, unknown homeworld or uid taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/people",
    tag = PEOPLE_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 201, description = "Successfully created character", body = CharacterDto),
        (status = 400, description = "Invalid or duplicate character data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_person(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateCharacterDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateCharacterParams::from_dto(payload)?;

    let character = CharacterService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(character.into_dto())))
}

/// Update a character.
///
/// Only the fields present in the body change; an explicit `"homeworld": null` clears
/// the homeworld.
///
/// # Returns
/// - `200 OK` - The updated character
/// - `400 Bad Request` - Malformed body, unknown homeworld or uid taken
/// - `404 Not Found` - No character with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/people/{id}",
    tag = PEOPLE_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    request_body = UpdateCharacterDto,
    responses(
        (status = 200, description = "Successfully updated character", body = CharacterDto),
        (status = 400, description = "Invalid or duplicate character data", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_person(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateCharacterDto>,
) -> Result<impl IntoResponse, AppError> {
    let character = CharacterService::new(&state.db)
        .update(id, UpdateCharacterParams::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

/// Delete a character.
#[utoipa::path(
    delete,
    path = "/people/{id}",
    tag = PEOPLE_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted character", body = MessageDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_person(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    CharacterService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Character deleted successfully")),
    ))
}
