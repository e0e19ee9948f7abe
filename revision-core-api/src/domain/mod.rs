pub mod config;
pub mod field_formatter;
pub mod field_name;
pub mod formatting_directive;
pub mod revision_action;

pub use config::*;
pub use field_formatter::*;
pub use field_name::*;
pub use formatting_directive::*;
pub use revision_action::*;
