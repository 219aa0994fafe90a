/// Shared utilities and types used across all layers
///
/// This module contains:
/// - Protocol definitions (MediaWiki `query` responses)
/// - Configuration for the remote API and tool defaults
/// - Error types

pub mod config;
pub mod error;
pub mod protocol;

// Re-export commonly used types
pub use config::ApiConfig;
pub use error::{ApiError, PoolError, TaxonomyError, ToolError};
pub use protocol::{InfoPage, LinksHerePage, QueryResponse};
