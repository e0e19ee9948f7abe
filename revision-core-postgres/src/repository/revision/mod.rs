pub mod revision_repository;

use std::sync::Arc;

use revision_repository::RevisionRepositoryImpl;

/// Repositories of the revision module sharing one unit of work
pub struct RevisionRepositories {
    pub revision_repository: Arc<RevisionRepositoryImpl>,
}
