//! Planet domain models and parameters.

use crate::{
    model::planet::{CreatePlanetDto, PlanetDto, UpdatePlanetDto},
    server::{error::AppError, util::validate::missing_fields},
};

/// Planet as stored in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub id: i32,
    /// External identifier, unique across planets.
    pub uid: i32,
    pub name: String,
    pub climate: String,
    pub diameter: i32,
    pub gravity: String,
    pub orbital_period: i32,
    pub population: i64,
    pub rotation_period: i32,
    pub terrain: String,
    pub url: String,
}

impl Planet {
    /// Converts an entity model to a planet domain model at the repository boundary.
    pub fn from_entity(entity: entity::planet::Model) -> Self {
        Self {
            id: entity.id,
            uid: entity.uid,
            name: entity.name,
            climate: entity.climate,
            diameter: entity.diameter,
            gravity: entity.gravity,
            orbital_period: entity.orbital_period,
            population: entity.population,
            rotation_period: entity.rotation_period,
            terrain: entity.terrain,
            url: entity.url,
        }
    }

    /// Converts the planet domain model to a DTO for API responses.
    pub fn into_dto(self) -> PlanetDto {
        PlanetDto {
            id: self.id,
            uid: self.uid,
            name: self.name,
            climate: self.climate,
            diameter: self.diameter,
            gravity: self.gravity,
            orbital_period: self.orbital_period,
            population: self.population,
            rotation_period: self.rotation_period,
            terrain: self.terrain,
            url: self.url,
        }
    }
}

/// Parameters for inserting a planet, with every column provided.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePlanetParams {
    pub uid: i32,
    pub name: String,
    pub climate: String,
    pub diameter: i32,
    pub gravity: String,
    pub orbital_period: i32,
    pub population: i64,
    pub rotation_period: i32,
    pub terrain: String,
    pub url: String,
}

impl CreatePlanetParams {
    /// Converts a request body into create parameters.
    ///
    /// # Returns
    /// - `Ok(CreatePlanetParams)` - Every required field was present
    /// - `Err(AppError::Validation)` - One or more fields were missing, all listed in the message
    pub fn from_dto(dto: CreatePlanetDto) -> Result<Self, AppError> {
        let presence = [
            ("uid", dto.uid.is_some()),
            ("name", dto.name.is_some()),
            ("climate", dto.climate.is_some()),
            ("diameter", dto.diameter.is_some()),
            ("gravity", dto.gravity.is_some()),
            ("orbital_period", dto.orbital_period.is_some()),
            ("population", dto.population.is_some()),
            ("rotation_period", dto.rotation_period.is_some()),
            ("terrain", dto.terrain.is_some()),
            ("url", dto.url.is_some()),
        ];

        match (
            dto.uid,
            dto.name,
            dto.climate,
            dto.diameter,
            dto.gravity,
            dto.orbital_period,
            dto.population,
            dto.rotation_period,
            dto.terrain,
            dto.url,
        ) {
            (
                Some(uid),
                Some(name),
                Some(climate),
                Some(diameter),
                Some(gravity),
                Some(orbital_period),
                Some(population),
                Some(rotation_period),
                Some(terrain),
                Some(url),
            ) => Ok(Self {
                uid,
                name,
                climate,
                diameter,
                gravity,
                orbital_period,
                population,
                rotation_period,
                terrain,
                url,
            }),
            _ => Err(missing_fields(&presence)),
        }
    }
}

/// Allow-listed partial update of a planet; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePlanetParams {
    pub uid: Option<i32>,
    pub name: Option<String>,
    pub climate: Option<String>,
    pub diameter: Option<i32>,
    pub gravity: Option<String>,
    pub orbital_period: Option<i32>,
    pub population: Option<i64>,
    pub rotation_period: Option<i32>,
    pub terrain: Option<String>,
    pub url: Option<String>,
}

impl UpdatePlanetParams {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<UpdatePlanetDto> for UpdatePlanetParams {
    fn from(dto: UpdatePlanetDto) -> Self {
        Self {
            uid: dto.uid,
            name: dto.name,
            climate: dto.climate,
            diameter: dto.diameter,
            gravity: dto.gravity,
            orbital_period: dto.orbital_period,
            population: dto.population,
            rotation_period: dto.rotation_period,
            terrain: dto.terrain,
            url: dto.url,
        }
    }
}
