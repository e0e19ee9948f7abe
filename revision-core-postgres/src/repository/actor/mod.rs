pub mod config;
pub mod repo_impl;
pub mod load_batch;

pub use config::ActorTableConfig;
pub use repo_impl::TableActorRepositoryImpl;
