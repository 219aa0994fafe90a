/// Application Layer - Use Cases and Services
///
/// Orchestrates the domain rules over the infrastructure: walks the
/// taxonomy, fans lookups out on the worker pool, and turns the ordered
/// results into reports.
///
/// ## Modules
/// - `services`: `WikiProjectLookup`, the two MediaWiki queries the tools make
/// - `use_cases`: Check WikiProjects, fetch templates, print nodes

pub mod services;
pub mod use_cases;

// Re-export key services
pub use services::WikiProjectLookup;
