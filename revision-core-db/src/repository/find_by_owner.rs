use async_trait::async_trait;
use sqlx::Database;

use crate::models::owner::OwnerReference;
use crate::repository::pagination::{Page, PageRequest};

/// Repository trait for listing the revision history of one entity
///
/// Results are ordered newest first.
///
/// # Example
/// ```ignore
/// let owner = OwnerReference::new("Post", "42")?;
/// let page = repo.find_by_owner(&owner, PageRequest::new(20, 0)).await?;
/// println!("Page {} of {}", page.page_number(), page.total_pages());
/// ```
#[async_trait]
pub trait FindByOwner<DB: Database, T>: Send + Sync {
    async fn find_by_owner(
        &self,
        owner: &OwnerReference,
        page: PageRequest,
    ) -> Result<Page<T>, Box<dyn std::error::Error + Send + Sync>>;
}
