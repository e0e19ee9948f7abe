pub mod actor;
pub mod identifiable;
pub mod owner;
pub mod revision;
pub mod revision_metadata;

// Re-exports
pub use actor::*;
pub use identifiable::*;
pub use owner::*;
pub use revision::*;
pub use revision_metadata::*;
