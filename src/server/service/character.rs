use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{character::CharacterRepository, planet::PlanetRepository},
    error::AppError,
    model::character::{Character, CreateCharacterParams, UpdateCharacterParams},
};

const DUPLICATE_CHARACTER: &str = "A character with this uid already exists";

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every character ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Character>, AppError> {
        let repo = CharacterRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a character by ID, failing with `NotFound` when absent
    pub async fn get_by_id(&self, id: i32) -> Result<Character, AppError> {
        let repo = CharacterRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Character not found".to_string()))
    }

    /// Creates a character after checking its homeworld exists
    pub async fn create(&self, params: CreateCharacterParams) -> Result<Character, AppError> {
        let txn = self.db.begin().await?;

        ensure_homeworld(&txn, params.homeworld).await?;

        let character = CharacterRepository::new(&txn)
            .create(params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, DUPLICATE_CHARACTER))?;

        txn.commit().await?;

        tracing::info!("Created character {} ({})", character.id, character.name);

        Ok(character)
    }

    /// Applies a partial update to a character inside a transaction
    ///
    /// A homeworld set to a planet ID is checked; setting it to null clears it.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateCharacterParams,
    ) -> Result<Character, AppError> {
        let txn = self.db.begin().await?;

        if let Some(homeworld) = params.homeworld {
            ensure_homeworld(&txn, homeworld).await?;
        }

        let character = CharacterRepository::new(&txn)
            .update(id, params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, DUPLICATE_CHARACTER))?
            .ok_or_else(|| AppError::NotFound("Character not found".to_string()))?;

        txn.commit().await?;

        Ok(character)
    }

    /// Deletes a character. Favorites of the character are kept.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = CharacterRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::NotFound("Character not found".to_string()));
        }

        tracing::info!("Deleted character {}", id);

        Ok(())
    }
}

async fn ensure_homeworld<C: ConnectionTrait>(db: &C, homeworld: Option<i32>) -> Result<(), AppError> {
    let Some(planet_id) = homeworld else {
        return Ok(());
    };

    if PlanetRepository::new(db).find_by_id(planet_id).await?.is_none() {
        return Err(AppError::Validation(format!(
            "Homeworld planet {} does not exist",
            planet_id
        )));
    }

    Ok(())
}
