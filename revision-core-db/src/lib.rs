pub mod models;
pub mod repository;
pub mod revisionable;
pub mod service;

#[cfg(test)]
pub mod test_utils;

// Re-exports
pub use models::*;
pub use revisionable::*;
pub use service::*;
