use heapless::String as HeaplessString;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;
use std::str::FromStr;
use thiserror::Error as ThisError;

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

/// Retrieves a required `HeaplessString` from a row.
pub fn get_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    let s: String = row.try_get(col_name)?;
    HeaplessString::from_str(&s).map_err(|_| {
        format!("Value for column '{col_name}' is too long (max {N} chars)").into()
    })
}

/// Retrieves an optional `HeaplessString` from a row.
pub fn get_optional_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<Option<HeaplessString<N>>, Box<dyn Error + Send + Sync>> {
    let s: Option<String> = row.try_get(col_name)?;
    s.map(|val| HeaplessString::from_str(&val))
        .transpose()
        .map_err(|_| {
            format!("Value for column '{col_name}' is too long (max {N} chars)").into()
        })
}

#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
#[error("Invalid SQL identifier: '{0}'")]
pub struct SqlIdentifierError(pub String);

/// Quotes a configured table or column name for interpolation into SQL.
///
/// Accepts `name` or `schema.name`, where each part starts with a letter or
/// underscore followed by letters, digits or underscores.
pub fn quote_identifier(name: &str) -> Result<String, SqlIdentifierError> {
    let parts: Vec<&str> = name.split('.').collect();
    if parts.len() > 2 || parts.iter().any(|part| !is_plain_identifier(part)) {
        return Err(SqlIdentifierError(name.to_string()));
    }
    Ok(parts
        .iter()
        .map(|part| format!("\"{part}\""))
        .collect::<Vec<_>>()
        .join("."))
}

/// Validates a column type name used in a `$1::<type>` cast, e.g. `uuid` or `bigint`
pub fn sql_type_name(name: &str) -> Result<String, SqlIdentifierError> {
    if is_plain_identifier(name) {
        Ok(name.to_ascii_lowercase())
    } else {
        Err(SqlIdentifierError(name.to_string()))
    }
}

fn is_plain_identifier(part: &str) -> bool {
    let mut chars = part.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
