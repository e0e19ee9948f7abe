use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for loading multiple records by their IDs
///
/// Returns items in the same order as the provided IDs.
/// Missing items are represented as None in the result.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The record type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl LoadBatch<Postgres, RevisionModel> for RevisionRepositoryImpl {
///     async fn load_batch(&self, ids: &[Uuid]) -> Result<Vec<Option<RevisionModel>>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait LoadBatch<DB: Database, T: Identifiable>: Send + Sync {
    /// Load multiple records by their unique identifiers
    ///
    /// # Returns
    /// * `Ok(Vec<Option<T>>)` - One entry per requested id, in request order
    /// * `Err` - An error if the query could not be executed
    async fn load_batch(&self, ids: &[Uuid]) -> Result<Vec<Option<T>>, Box<dyn std::error::Error + Send + Sync>>;
}
