/// Domain Layer - Taxonomy Model and Lookup Rules
///
/// Pure logic with no I/O: the taxonomy tree and its traversals, and the
/// rules that turn MediaWiki responses into per-leaf outcomes. Everything
/// here can be tested without a network or a file system.
///
/// ## Modules
/// - `taxonomy`: Nested category tree, depth-first walker, outline printer
/// - `page_status`: Existence check classification
/// - `templates`: Template alias collection

pub mod page_status;
pub mod taxonomy;
pub mod templates;

// Re-export key types
pub use page_status::{classify, PageStatus};
pub use taxonomy::{LeafRecord, Leaves, Node, Taxonomy};
pub use templates::TemplateLookup;
