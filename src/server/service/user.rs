use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, UpdateUserParams, User},
};

const DUPLICATE_USER: &str = "Username or email already exists";

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every user ordered by ID
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a user by ID, failing with `NotFound` when absent
    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Creates a user; a taken username or email is reported as a conflict
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let user = repo
            .create(params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, DUPLICATE_USER))?;

        tracing::info!("Created user {} ({})", user.id, user.username);

        Ok(user)
    }

    /// Applies a partial update to a user inside a transaction
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<User, AppError> {
        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        let user = repo
            .update(id, params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, DUPLICATE_USER))?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        txn.commit().await?;

        Ok(user)
    }

    /// Deletes a user. Favorites owned by the user are kept.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!("Deleted user {}", id);

        Ok(())
    }
}
