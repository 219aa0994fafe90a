/// MediaWiki API access
///
/// - `traits` - the `WikiApi` seam used by the application layer
/// - `client` - blocking HTTP implementation against `api.php`

pub mod client;
pub mod traits;

pub use client::MediaWikiClient;
pub use traits::{QueryParams, WikiApi};
