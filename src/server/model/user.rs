//! User domain models and parameters.

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::{error::AppError, util::validate::missing_fields},
};

/// Catalog user; the owner of favorites.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
        }
    }
}

/// Parameters for creating a user.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
}

impl CreateUserParams {
    /// Converts a request body into create parameters.
    ///
    /// # Returns
    /// - `Ok(CreateUserParams)` - Both username and email were present
    /// - `Err(AppError::Validation)` - A field was missing
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        let presence = [
            ("username", dto.username.is_some()),
            ("email", dto.email.is_some()),
        ];

        match (dto.username, dto.email) {
            (Some(username), Some(email)) => Ok(Self { username, email }),
            _ => Err(missing_fields(&presence)),
        }
    }
}

/// Allow-listed partial update of a user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUserParams {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl UpdateUserParams {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none()
    }
}

impl From<UpdateUserDto> for UpdateUserParams {
    fn from(dto: UpdateUserDto) -> Self {
        Self {
            username: dto.username,
            email: dto.email,
        }
    }
}
