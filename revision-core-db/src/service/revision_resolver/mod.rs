pub mod describe;
pub mod primary_identifier;
pub mod resolver_impl;
pub mod summary;
pub mod value;

pub use describe::RevisionView;
pub use resolver_impl::RevisionResolver;
