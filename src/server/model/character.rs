//! Character domain models and parameters.
//!
//! Characters are exposed over HTTP as "people". The `homeworld` column references a planet
//! by ID and is cleared automatically when that planet is deleted.

use crate::{
    model::character::{CharacterDto, CreateCharacterDto, UpdateCharacterDto},
    server::{error::AppError, util::validate::missing_fields},
};

/// Character as stored in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i32,
    /// External identifier, unique across characters.
    pub uid: i32,
    pub name: String,
    pub gender: String,
    pub skin_color: String,
    pub hair_color: String,
    pub height: i32,
    pub eye_color: String,
    pub mass: i32,
    /// ID of the character's home planet, if known.
    pub homeworld: Option<i32>,
    pub birth_year: String,
    pub url: String,
}

impl Character {
    /// Converts an entity model to a character domain model at the repository boundary.
    pub fn from_entity(entity: entity::character::Model) -> Self {
        Self {
            id: entity.id,
            uid: entity.uid,
            name: entity.name,
            gender: entity.gender,
            skin_color: entity.skin_color,
            hair_color: entity.hair_color,
            height: entity.height,
            eye_color: entity.eye_color,
            mass: entity.mass,
            homeworld: entity.homeworld,
            birth_year: entity.birth_year,
            url: entity.url,
        }
    }

    /// Converts the character domain model to a DTO for API responses.
    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            uid: self.uid,
            name: self.name,
            gender: self.gender,
            skin_color: self.skin_color,
            hair_color: self.hair_color,
            height: self.height,
            eye_color: self.eye_color,
            mass: self.mass,
            homeworld: self.homeworld,
            birth_year: self.birth_year,
            url: self.url,
        }
    }
}

/// Parameters for inserting a character.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCharacterParams {
    pub uid: i32,
    pub name: String,
    pub gender: String,
    pub skin_color: String,
    pub hair_color: String,
    pub height: i32,
    pub eye_color: String,
    pub mass: i32,
    pub homeworld: Option<i32>,
    pub birth_year: String,
    pub url: String,
}

impl CreateCharacterParams {
    /// Converts a request body into create parameters.
    ///
    /// `homeworld` must be present in the body but may be `null`.
    ///
    /// # Returns
    /// - `Ok(CreateCharacterParams)` - Every required field was present
    /// - `Err(AppError::Validation)` - One or more fields were missing, all listed in the message
    pub fn from_dto(dto: CreateCharacterDto) -> Result<Self, AppError> {
        let presence = [
            ("uid", dto.uid.is_some()),
            ("name", dto.name.is_some()),
            ("gender", dto.gender.is_some()),
            ("skin_color", dto.skin_color.is_some()),
            ("hair_color", dto.hair_color.is_some()),
            ("height", dto.height.is_some()),
            ("eye_color", dto.eye_color.is_some()),
            ("mass", dto.mass.is_some()),
            ("homeworld", dto.homeworld.is_some()),
            ("birth_year", dto.birth_year.is_some()),
            ("url", dto.url.is_some()),
        ];

        match (
            dto.uid,
            dto.name,
            dto.gender,
            dto.skin_color,
            dto.hair_color,
            dto.height,
            dto.eye_color,
            dto.mass,
            dto.homeworld,
            dto.birth_year,
            dto.url,
        ) {
            (
                Some(uid),
                Some(name),
                Some(gender),
                Some(skin_color),
                Some(hair_color),
                Some(height),
                Some(eye_color),
                Some(mass),
                Some(homeworld),
                Some(birth_year),
                Some(url),
            ) => Ok(Self {
                uid,
                name,
                gender,
                skin_color,
                hair_color,
                height,
                eye_color,
                mass,
                homeworld,
                birth_year,
                url,
            }),
            _ => Err(missing_fields(&presence)),
        }
    }
}

/// Allow-listed partial update of a character.
///
/// `homeworld` is `None` to leave it untouched, `Some(None)` to clear it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCharacterParams {
    pub uid: Option<i32>,
    pub name: Option<String>,
    pub gender: Option<String>,
    pub skin_color: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<i32>,
    pub eye_color: Option<String>,
    pub mass: Option<i32>,
    pub homeworld: Option<Option<i32>>,
    pub birth_year: Option<String>,
    pub url: Option<String>,
}

impl UpdateCharacterParams {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<UpdateCharacterDto> for UpdateCharacterParams {
    fn from(dto: UpdateCharacterDto) -> Self {
        Self {
            uid: dto.uid,
            name: dto.name,
            gender: dto.gender,
            skin_color: dto.skin_color,
            hair_color: dto.hair_color,
            height: dto.height,
            eye_color: dto.eye_color,
            mass: dto.mass,
            homeworld: dto.homeworld,
            birth_year: dto.birth_year,
            url: dto.url,
        }
    }
}
