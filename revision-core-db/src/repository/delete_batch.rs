use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

/// Generic repository trait for deleting multiple records in a batch
///
/// Used by retention policies; revisions are otherwise never removed.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
#[async_trait]
pub trait DeleteBatch<DB: Database>: Send + Sync {
    /// Delete multiple records by their IDs
    ///
    /// # Returns
    /// * `Ok(usize)` - The number of records actually deleted
    /// * `Err` - An error if the transaction could not be executed
    async fn delete_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}
