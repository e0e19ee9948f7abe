pub mod entity;
pub mod registry;

pub use entity::*;
pub use registry::*;
