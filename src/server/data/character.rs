//! Character data repository for database operations.
//!
//! Provides the `CharacterRepository`, the storage side of the `/people` endpoints.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::character::{
    Character, CreateCharacterParams, UpdateCharacterParams,
};

/// Repository providing database operations for characters.
pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new CharacterRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every character ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Character>)` - All characters (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Character>, DbErr> {
        let entities = entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Character::from_entity).collect())
    }

    /// Finds a character by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(Character))` - Character found
    /// - `Ok(None)` - No character with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Character>, DbErr> {
        let entity = entity::prelude::Character::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Character::from_entity))
    }

    /// Inserts a new character.
    ///
    /// # Returns
    /// - `Ok(Character)` - The created character including its generated ID
    /// - `Err(DbErr)` - Database error, including a unique violation on `uid` or a
    ///   homeworld that does not reference an existing planet
    pub async fn create(&self, param: CreateCharacterParams) -> Result<Character, DbErr> {
        let entity = entity::character::ActiveModel {
            uid: ActiveValue::Set(param.uid),
            name: ActiveValue::Set(param.name),
            gender: ActiveValue::Set(param.gender),
            skin_color: ActiveValue::Set(param.skin_color),
            hair_color: ActiveValue::Set(param.hair_color),
            height: ActiveValue::Set(param.height),
            eye_color: ActiveValue::Set(param.eye_color),
            mass: ActiveValue::Set(param.mass),
            homeworld: ActiveValue::Set(param.homeworld),
            birth_year: ActiveValue::Set(param.birth_year),
            url: ActiveValue::Set(param.url),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Character::from_entity(entity))
    }

    /// Overwrites the provided fields of a character.
    ///
    /// # Returns
    /// - `Ok(Some(Character))` - The character after the update
    /// - `Ok(None)` - No character with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateCharacterParams,
    ) -> Result<Option<Character>, DbErr> {
        let Some(entity) = entity::prelude::Character::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if param.is_empty() {
            return Ok(Some(Character::from_entity(entity)));
        }

        let mut active: entity::character::ActiveModel = entity.into();
        if let Some(uid) = param.uid {
            active.uid = ActiveValue::Set(uid);
        }
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(gender) = param.gender {
            active.gender = ActiveValue::Set(gender);
        }
        if let Some(skin_color) = param.skin_color {
            active.skin_color = ActiveValue::Set(skin_color);
        }
        if let Some(hair_color) = param.hair_color {
            active.hair_color = ActiveValue::Set(hair_color);
        }
        if let Some(height) = param.height {
            active.height = ActiveValue::Set(height);
        }
        if let Some(eye_color) = param.eye_color {
            active.eye_color = ActiveValue::Set(eye_color);
        }
        if let Some(mass) = param.mass {
            active.mass = ActiveValue::Set(mass);
        }
        if let Some(homeworld) = param.homeworld {
            active.homeworld = ActiveValue::Set(homeworld);
        }
        if let Some(birth_year) = param.birth_year {
            active.birth_year = ActiveValue::Set(birth_year);
        }
        if let Some(url) = param.url {
            active.url = ActiveValue::Set(url);
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Character::from_entity(updated)))
    }

    /// Deletes a character by ID. Favorites pointing at it are left in place.
    ///
    /// # Returns
    /// - `Ok(true)` - The character was deleted
    /// - `Ok(false)` - No character with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Character::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
