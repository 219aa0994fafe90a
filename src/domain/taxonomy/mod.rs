/// Domain Layer - Taxonomy Module
///
/// A taxonomy maps category names either to sub-categories or to a list of
/// leaf names (WikiProjects). The two shapes are distinct variants of
/// [`Node`], so a leaf list can never contain further categories.

pub mod outline;
pub mod tree;
pub mod walker;

pub use outline::node_lines;
pub use tree::{Node, Taxonomy};
pub use walker::{LeafRecord, Leaves};
