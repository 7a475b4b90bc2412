use entity::sea_orm_active_enums::FavoriteType;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        character::CharacterRepository, favorite::FavoriteRepository, planet::PlanetRepository,
        user::UserRepository,
    },
    error::AppError,
    model::favorite::{favorite_type_label, Favorite, FavoriteTarget},
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the favorites of every user ordered by ID
    pub async fn list_favorites(&self) -> Result<Vec<Favorite>, AppError> {
        let repo = FavoriteRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets the favorites of a single user, failing with `NotFound` for an unknown user
    pub async fn list_user_favorites(&self, user_id: i32) -> Result<Vec<Favorite>, AppError> {
        if !UserRepository::new(self.db).exists(user_id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(FavoriteRepository::new(self.db).get_by_user(user_id).await?)
    }

    /// Marks a planet or character as a favorite of the user
    ///
    /// The target is checked before the user, so a missing target is reported even when the
    /// user does not exist. Checks and insert run in one transaction.
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite
    /// - `Err(AppError::NotFound)` - Unknown target or user
    /// - `Err(AppError::Conflict)` - The user already favorited the target
    pub async fn add_favorite(&self, target: FavoriteTarget) -> Result<Favorite, AppError> {
        let txn = self.db.begin().await?;

        let target_exists = match target.favorite_type {
            FavoriteType::Planet => PlanetRepository::new(&txn)
                .find_by_id(target.favorite_id)
                .await?
                .is_some(),
            FavoriteType::Character => CharacterRepository::new(&txn)
                .find_by_id(target.favorite_id)
                .await?
                .is_some(),
        };
        if !target_exists {
            return Err(AppError::NotFound(format!(
                "{} not found",
                favorite_type_label(target.favorite_type)
            )));
        }

        if !UserRepository::new(&txn).exists(target.user_id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let repo = FavoriteRepository::new(&txn);
        let duplicate = format!(
            "{} is already a favorite",
            favorite_type_label(target.favorite_type)
        );
        if repo.find(target).await?.is_some() {
            return Err(AppError::Conflict(duplicate));
        }

        let favorite = repo
            .create(target)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, duplicate))?;

        txn.commit().await?;

        tracing::info!(
            "User {} added {} {} to favorites",
            target.user_id,
            favorite_type_label(target.favorite_type),
            target.favorite_id
        );

        Ok(favorite)
    }

    /// Removes a favorite of the user
    ///
    /// # Returns
    /// - `Ok(())` - The favorite was removed
    /// - `Err(AppError::NotFound)` - The user never favorited the target
    pub async fn remove_favorite(&self, target: FavoriteTarget) -> Result<(), AppError> {
        let repo = FavoriteRepository::new(self.db);

        if !repo.delete(target).await? {
            return Err(AppError::NotFound("Favorite not found".to_string()));
        }

        tracing::info!(
            "User {} removed {} {} from favorites",
            target.user_id,
            favorite_type_label(target.favorite_type),
            target.favorite_id
        );

        Ok(())
    }
}
