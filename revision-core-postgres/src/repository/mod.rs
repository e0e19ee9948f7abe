pub mod actor;
pub mod entity;
pub mod revision;
