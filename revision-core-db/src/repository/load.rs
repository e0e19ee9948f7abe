use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for loading a single record by its ID
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The record type that must implement Identifiable trait
#[async_trait]
pub trait Load<DB: Database, T: Identifiable>: Send + Sync {
    /// Load a record by its unique identifier
    ///
    /// # Returns
    /// * `Ok(T)` - The loaded record
    /// * `Err` - If the record does not exist or could not be loaded
    async fn load(&self, id: Uuid) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
