use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::FavoriteType;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::FavoriteDto,
    },
    server::{
        error::AppError,
        middleware::principal::CurrentUser,
        model::favorite::FavoriteTarget,
        service::favorite::FavoriteService,
        state::AppState,
        util::path::ApiPath,
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

/// List the favorites of every user.
#[utoipa::path(
    get,
    path = "/favorite",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved favorites", body = Vec<FavoriteDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let favorites = FavoriteService::new(&state.db).list_favorites().await?;

    Ok((
        StatusCode::OK,
        Json(favorites.into_iter().map(|f| f.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Add a planet to the current user's favorites.
///
/// # Returns
/// - `201 Created` - Confirmation message
/// - `400 Bad Request` - The planet is already a favorite
/// - `404 Not Found` - Unknown planet or current user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/favorite/planet/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 201, description = "Successfully added favorite planet", body = MessageDto),
        (status = 400, description = "Planet is already a favorite", body = ErrorDto),
        (status = 404, description = "Planet or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    FavoriteService::new(&state.db)
        .add_favorite(target(user_id, id, FavoriteType::Planet))
        .await?;

    Ok((StatusCode::CREATED, Json(MessageDto::new("Favorite planet added"))))
}

/// Add a character to the current user's favorites.
///
/// # Returns
/// - `201 Created` - Confirmation message
/// - `400 Bad Request` - The character is already a favorite
/// - `404 Not Found` - Unknown character or current user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/favorite/people/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 201, description = "Successfully added favorite character", body = MessageDto),
        (status = 400, description = "Character is already a favorite", body = ErrorDto),
        (status = 404, description = "Character or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_person(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    FavoriteService::new(&state.db)
        .add_favorite(target(user_id, id, FavoriteType::Character))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("Favorite character added")),
    ))
}

/// Remove a planet from the current user's favorites.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - The planet is not a favorite of the current user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/favorite/planet/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Successfully removed favorite planet", body = MessageDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    FavoriteService::new(&state.db)
        .remove_favorite(target(user_id, id, FavoriteType::Planet))
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Favorite planet removed"))))
}

/// Remove a character from the current user's favorites.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - The character is not a favorite of the current user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/favorite/people/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Successfully removed favorite character", body = MessageDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_person(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    FavoriteService::new(&state.db)
        .remove_favorite(target(user_id, id, FavoriteType::Character))
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Favorite character removed")),
    ))
}

fn target(user_id: i32, favorite_id: i32, favorite_type: FavoriteType) -> FavoriteTarget {
    FavoriteTarget {
        user_id,
        favorite_id,
        favorite_type,
    }
}
