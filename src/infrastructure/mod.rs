/// Infrastructure Layer - Technical Implementations
///
/// Everything that touches the outside world: YAML files on disk, the
/// MediaWiki HTTP API, and the OS threads the lookups run on.
///
/// The domain layer does not depend on this layer; the application layer
/// reaches the API only through the `WikiApi` trait.
///
/// ## Modules
/// - `mediawiki`: `WikiApi` trait and its blocking HTTP implementation
/// - `taxonomy_loader`: Reads and merges taxonomy files
/// - `worker_pool`: Bounded fan-out with ordered results

pub mod mediawiki;
pub mod taxonomy_loader;
pub mod worker_pool;

// Re-export key types
pub use mediawiki::{MediaWikiClient, QueryParams, WikiApi};
pub use taxonomy_loader::{load_taxonomy, parse_taxonomy};
pub use worker_pool::{PoolConfig, WorkerPool};
