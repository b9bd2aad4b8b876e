use thiserror::Error;

/// Errors that can occur when working with catalog data.
#[derive(Error, Debug)]
pub enum RivuletCatalogError {
    /// A primary key component referencing a position outside the entity's
    /// column list.
    #[error("Primary key index {index} is out of range for {columns} columns")]
    PrimaryKeyOutOfRange {
        /// The offending index.
        index: usize,
        /// The number of columns the entity actually has.
        columns: usize,
    },

    /// A catalog snapshot document that could not be interpreted.
    #[error("Failed to interpret catalog snapshot: {0}")]
    Snapshot(String),

    /// A name that does not identify a catalog kind.
    #[error("Unknown catalog kind: {0}")]
    UnknownKind(String),
}

impl From<serde_json::Error> for RivuletCatalogError {
    fn from(value: serde_json::Error) -> Self {
        RivuletCatalogError::Snapshot(value.to_string())
    }
}
