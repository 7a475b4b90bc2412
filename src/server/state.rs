//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a connection pool whose clones
/// share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Principal used by favorites endpoints, see `middleware::principal`.
    pub current_user_id: i32,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `current_user_id` - ID of the user favorites requests act on
    pub fn new(db: DatabaseConnection, current_user_id: i32) -> Self {
        Self {
            db,
            current_user_id,
        }
    }
}
