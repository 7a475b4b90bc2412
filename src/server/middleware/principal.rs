//! Request principal resolution.
//!
//! Favorites endpoints act on behalf of a user. `CurrentUser` resolves that user for each
//! request from the configured `CURRENT_USER_ID`; an authentication layer can replace this
//! extractor without touching handlers or services.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::{error::AppError, state::AppState};

/// ID of the user the current request acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub i32);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(CurrentUser(state.current_user_id))
    }
}
