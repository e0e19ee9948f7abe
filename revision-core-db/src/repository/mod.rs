pub mod create_batch;
pub mod delete_batch;
pub mod find_by_owner;
pub mod load;
pub mod load_batch;
pub mod pagination;

// Re-exports
pub use create_batch::*;
pub use delete_batch::*;
pub use find_by_owner::*;
pub use load::*;
pub use load_batch::*;
pub use pagination::*;
