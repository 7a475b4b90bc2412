//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered through `OpenApiRouter` so the OpenAPI document stays
//! complete. The same document feeds the Swagger UI at `/api/docs` and the endpoint sitemap
//! served at `/`.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, state::AppState, util::sitemap::build_sitemap};

/// Builds the application's HTTP router.
///
/// # Registered Endpoints
/// - `/users`, `/users/{id}`, `/users/favorites`
/// - `/people`, `/people/{id}`
/// - `/planets`, `/planets/{id}`
/// - `/favorite`, `/favorite/planet/{id}`, `/favorite/people/{id}`
/// - `/` - Sitemap listing every endpoint above
/// - `/api/docs` - Swagger UI, with the document at `/api/docs/openapi.json`
///
/// # Returns
/// An Axum `Router<AppState>` that still needs its state supplied via `with_state`.
pub fn router() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Star Wars catalog API"), tags(
        (name = controller::user::USER_TAG, description = "User management"),
        (name = controller::planet::PLANET_TAG, description = "Planet catalog"),
        (name = controller::character::PEOPLE_TAG, description = "Character catalog"),
        (name = controller::favorite::FAVORITE_TAG, description = "User favorites"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::user::get_users,
            controller::user::create_user
        ))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user,
            controller::user::delete_user
        ))
        .routes(routes!(
            controller::character::get_people,
            controller::character::create_person
        ))
        .routes(routes!(
            controller::character::get_person,
            controller::character::update_person,
            controller::character::delete_person
        ))
        .routes(routes!(
            controller::planet::get_planets,
            controller::planet::create_planet
        ))
        .routes(routes!(
            controller::planet::get_planet,
            controller::planet::update_planet,
            controller::planet::delete_planet
        ))
        .routes(routes!(controller::favorite::get_favorites))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::remove_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_person,
            controller::favorite::remove_favorite_person
        ))
        .split_for_parts();

    let sitemap = build_sitemap(&api);

    routes
        .route(
            "/",
            get(move || {
                let sitemap = sitemap.clone();
                async move { Json(sitemap) }
            }),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
