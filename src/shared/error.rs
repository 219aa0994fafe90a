/// Error types shared by every layer.

use std::path::PathBuf;

/// Errors raised while loading or merging taxonomy files
#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
    #[error("Could not read taxonomy file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML in {origin}: {source}")]
    Yaml {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// A value that is neither a mapping nor a list of names
    #[error("Unexpected {found} at {path}: expected a mapping or a list of names")]
    Shape { path: String, found: &'static str },
}

/// Errors raised by a single MediaWiki API request
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP status {0}")]
    Status(u16),

    /// The API answered with an `error` object
    #[error("API error {code}: {info}")]
    Api { code: String, info: String },

    #[error("Could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Worker pool failures
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error("Could not spawn worker thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("A worker thread panicked")]
    WorkerPanicked,
}

/// Top-level error of a tool run
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error(transparent)]
    Taxonomy(#[from] TaxonomyError),

    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Could not write report: {0}")]
    Io(#[from] std::io::Error),
}
