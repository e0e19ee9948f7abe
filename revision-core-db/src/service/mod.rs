pub mod actor_resolver;
pub mod observer;
pub mod revision_resolver;

pub use actor_resolver::*;
pub use observer::*;
pub use revision_resolver::*;
