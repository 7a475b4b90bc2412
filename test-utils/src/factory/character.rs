//! Character factory for creating test character entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Factory for creating test characters with customizable fields.
///
/// Defaults describe Luke Skywalker without a homeworld so no planet row is required.
pub struct CharacterFactory<'a, C: ConnectionTrait> {
    db: &'a C,
    uid: i32,
    name: String,
    homeworld: Option<i32>,
}

impl<'a, C: ConnectionTrait> CharacterFactory<'a, C> {
    /// Creates a new CharacterFactory with default values.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CharacterFactory` - New factory instance with defaults
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            uid: next_id() as i32,
            name: "Luke Skywalker".to_string(),
            homeworld: None,
        }
    }

    /// Sets the external uid of the character.
    pub fn uid(mut self, uid: i32) -> Self {
        self.uid = uid;
        self
    }

    /// Sets the name of the character.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the homeworld planet id; the planet must already exist.
    pub fn homeworld(mut self, homeworld: Option<i32>) -> Self {
        self.homeworld = homeworld;
        self
    }

    /// Builds and inserts the character entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::character::Model)` - Created character entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            uid: ActiveValue::Set(self.uid),
            name: ActiveValue::Set(self.name),
            gender: ActiveValue::Set("male".to_string()),
            skin_color: ActiveValue::Set("fair".to_string()),
            hair_color: ActiveValue::Set("blond".to_string()),
            height: ActiveValue::Set(172),
            eye_color: ActiveValue::Set("blue".to_string()),
            mass: ActiveValue::Set(77),
            homeworld: ActiveValue::Set(self.homeworld),
            birth_year: ActiveValue::Set("19BBY".to_string()),
            url: ActiveValue::Set(format!("https://swapi.tech/api/people/{}", self.uid)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values.
pub async fn create_character<C: ConnectionTrait>(
    db: &C,
) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db).build().await
}
