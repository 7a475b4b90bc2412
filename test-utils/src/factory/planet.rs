//! Planet factory for creating test planet entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Factory for creating test planets with customizable fields.
///
/// Defaults describe Tatooine with a unique `uid` and `url`.
pub struct PlanetFactory<'a, C: ConnectionTrait> {
    db: &'a C,
    uid: i32,
    name: String,
    population: i64,
}

impl<'a, C: ConnectionTrait> PlanetFactory<'a, C> {
    /// Creates a new PlanetFactory with default values.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `PlanetFactory` - New factory instance with defaults
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            uid: next_id() as i32,
            name: "Tatooine".to_string(),
            population: 200_000,
        }
    }

    /// Sets the external uid of the planet.
    pub fn uid(mut self, uid: i32) -> Self {
        self.uid = uid;
        self
    }

    /// Sets the name of the planet.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the population of the planet.
    pub fn population(mut self, population: i64) -> Self {
        self.population = population;
        self
    }

    /// Builds and inserts the planet entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::planet::Model)` - Created planet entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::planet::Model, DbErr> {
        entity::planet::ActiveModel {
            uid: ActiveValue::Set(self.uid),
            name: ActiveValue::Set(self.name),
            climate: ActiveValue::Set("arid".to_string()),
            diameter: ActiveValue::Set(10465),
            gravity: ActiveValue::Set("1 standard".to_string()),
            orbital_period: ActiveValue::Set(304),
            population: ActiveValue::Set(self.population),
            rotation_period: ActiveValue::Set(23),
            terrain: ActiveValue::Set("desert".to_string()),
            url: ActiveValue::Set(format!("https://swapi.tech/api/planets/{}", self.uid)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a planet with default values.
pub async fn create_planet<C: ConnectionTrait>(db: &C) -> Result<entity::planet::Model, DbErr> {
    PlanetFactory::new(db).build().await
}
