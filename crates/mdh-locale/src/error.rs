//! Locale error types.

use mdh_storage::StorageError;

/// Errors raised while loading or parsing lookup tables.
///
/// These never escape [`LookupTables`](crate::LookupTables): a table that fails
/// to load is logged and treated as empty.
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    /// State abbreviation not in the fixed set of eight.
    #[error("Unknown Australian state: {0}")]
    UnknownState(String),
    /// Underlying storage failure.
    #[error("{0}")]
    Storage(#[from] StorageError),
    /// Table document is not valid JSON of the expected shape.
    #[error("Invalid table {path}: {source}")]
    Parse {
        /// Data key of the table.
        path: String,
        /// JSON error.
        #[source]
        source: serde_json::Error,
    },
}
