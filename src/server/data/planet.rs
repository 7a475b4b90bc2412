//! Planet data repository for database operations.
//!
//! Provides the `PlanetRepository` for listing, reading, inserting, patching and deleting
//! planet rows, converting entity models into domain models at the boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::planet::{CreatePlanetParams, Planet, UpdatePlanetParams};

/// Repository providing database operations for planets.
///
/// Generic over the connection so it runs equally on the pool or inside a transaction.
pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new PlanetRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every planet ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Planet>)` - All planets (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Planet>, DbErr> {
        let entities = entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Planet::from_entity).collect())
    }

    /// Finds a planet by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(Planet))` - Planet found
    /// - `Ok(None)` - No planet with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, DbErr> {
        let entity = entity::prelude::Planet::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Planet::from_entity))
    }

    /// Inserts a new planet.
    ///
    /// # Returns
    /// - `Ok(Planet)` - The created planet including its generated ID
    /// - `Err(DbErr)` - Database error, including a unique violation on `uid`
    pub async fn create(&self, param: CreatePlanetParams) -> Result<Planet, DbErr> {
        let entity = entity::planet::ActiveModel {
            uid: ActiveValue::Set(param.uid),
            name: ActiveValue::Set(param.name),
            climate: ActiveValue::Set(param.climate),
            diameter: ActiveValue::Set(param.diameter),
            gravity: ActiveValue::Set(param.gravity),
            orbital_period: ActiveValue::Set(param.orbital_period),
            population: ActiveValue::Set(param.population),
            rotation_period: ActiveValue::Set(param.rotation_period),
            terrain: ActiveValue::Set(param.terrain),
            url: ActiveValue::Set(param.url),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Planet::from_entity(entity))
    }

    /// Overwrites the provided fields of a planet.
    ///
    /// Fields left as `None` in the patch keep their stored value.
    ///
    /// # Returns
    /// - `Ok(Some(Planet))` - The planet after the update
    /// - `Ok(None)` - No planet with that ID
    /// - `Err(DbErr)` - Database error, including a unique violation on `uid`
    pub async fn update(
        &self,
        id: i32,
        param: UpdatePlanetParams,
    ) -> Result<Option<Planet>, DbErr> {
        let Some(entity) = entity::prelude::Planet::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        if param.is_empty() {
            return Ok(Some(Planet::from_entity(entity)));
        }

        let mut active: entity::planet::ActiveModel = entity.into();
        if let Some(uid) = param.uid {
            active.uid = ActiveValue::Set(uid);
        }
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(climate) = param.climate {
            active.climate = ActiveValue::Set(climate);
        }
        if let Some(diameter) = param.diameter {
            active.diameter = ActiveValue::Set(diameter);
        }
        if let Some(gravity) = param.gravity {
            active.gravity = ActiveValue::Set(gravity);
        }
        if let Some(orbital_period) = param.orbital_period {
            active.orbital_period = ActiveValue::Set(orbital_period);
        }
        if let Some(population) = param.population {
            active.population = ActiveValue::Set(population);
        }
        if let Some(rotation_period) = param.rotation_period {
            active.rotation_period = ActiveValue::Set(rotation_period);
        }
        if let Some(terrain) = param.terrain {
            active.terrain = ActiveValue::Set(terrain);
        }
        if let Some(url) = param.url {
            active.url = ActiveValue::Set(url);
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Planet::from_entity(updated)))
    }

    /// Deletes a planet by ID.
    ///
    /// Favorites pointing at the planet are left in place; characters referencing it as
    /// their homeworld have the reference cleared by the database.
    ///
    /// # Returns
    /// - `Ok(true)` - The planet was deleted
    /// - `Ok(false)` - No planet with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Planet::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
