pub mod config;
pub mod postgres_repositories;
pub mod repository;
pub mod utils;

pub use config::DatabaseConfig;
pub use postgres_repositories::PostgresRepositories;
pub use repository::actor::{ActorTableConfig, TableActorRepositoryImpl};
pub use repository::entity::{PgTableEntityType, TableEntityConfig};
pub use repository::revision::revision_repository::RevisionRepositoryImpl;

#[cfg(test)]
pub mod test_helper;
