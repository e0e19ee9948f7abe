pub mod config;
pub mod table_entity;
pub mod table_record;

pub use config::TableEntityConfig;
pub use table_entity::PgTableEntityType;
pub use table_record::TableRecord;
