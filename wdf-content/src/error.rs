//! Error types

use std::fmt;

/// A key did not resolve to a record of the named collection.
///
/// Keys are only ever produced from the catalog itself, so this signals a
/// programming error rather than bad input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    UnknownKey {
        collection: &'static str,
        key: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::UnknownKey { collection, key } => {
                write!(f, "no {} with key '{}'", collection, key)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

pub type Result<T> = std::result::Result<T, CatalogError>;
