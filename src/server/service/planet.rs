use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::planet::PlanetRepository,
    error::AppError,
    model::planet::{CreatePlanetParams, Planet, UpdatePlanetParams},
};

const DUPLICATE_PLANET: &str = "A planet with this uid already exists";

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every planet ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Planet>, AppError> {
        let repo = PlanetRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a planet by ID, failing with `NotFound` when absent
    pub async fn get_by_id(&self, id: i32) -> Result<Planet, AppError> {
        let repo = PlanetRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Planet not found".to_string()))
    }

    /// Creates a planet; a reused uid is reported as a conflict
    pub async fn create(&self, params: CreatePlanetParams) -> Result<Planet, AppError> {
        let repo = PlanetRepository::new(self.db);

        let planet = repo
            .create(params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, DUPLICATE_PLANET))?;

        tracing::info!("Created planet {} ({})", planet.id, planet.name);

        Ok(planet)
    }

    /// Applies a partial update to a planet inside a transaction
    pub async fn update(&self, id: i32, params: UpdatePlanetParams) -> Result<Planet, AppError> {
        let txn = self.db.begin().await?;
        let repo = PlanetRepository::new(&txn);

        let planet = repo
            .update(id, params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, DUPLICATE_PLANET))?
            .ok_or_else(|| AppError::NotFound("Planet not found".to_string()))?;

        txn.commit().await?;

        Ok(planet)
    }

    /// Deletes a planet
    ///
    /// Characters born there lose their homeworld. Favorites of the planet are kept.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = PlanetRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::NotFound("Planet not found".to_string()));
        }

        tracing::info!("Deleted planet {}", id);

        Ok(())
    }
}
