//! Catalog error types.

/// Errors that can occur while loading the route catalog.
///
/// All of these are fatal at startup: the process must not begin
/// serving requests without a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not valid JSON, or a record is missing a
    /// required field.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
