use std::path::PathBuf;

/// Errors raised while reading or querying a planet catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog must be a JSON array of planet records, found {found}")]
    NotAnArray { found: &'static str },

    #[error("planet record {index} could not be decoded: {source}")]
    Record {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("no planets selected for comparison")]
    EmptySelection,
}
