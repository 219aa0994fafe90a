/// Taxonomy tree
///
/// Keys keep the order in which they were first seen in the source
/// documents; traversals follow that order.

use indexmap::map::{Entry, Iter};
use indexmap::IndexMap;

use super::walker::Leaves;

/// A node of the taxonomy: either a branch of sub-categories or a terminal
/// list of leaf names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Branch(Taxonomy),
    Leaves(Vec<String>),
}

impl Node {
    /// Builds a leaf list node
    pub fn leaves<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Node::Leaves(names.into_iter().map(Into::into).collect())
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, Node::Branch(_))
    }

    /// Short name of the variant, used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Branch(_) => "branch",
            Node::Leaves(_) => "leaf list",
        }
    }
}

/// Nested category hierarchy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Taxonomy {
    nodes: IndexMap<String, Node>,
}

impl Taxonomy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the node stored under `key`
    pub fn insert(&mut self, key: impl Into<String>, node: Node) -> Option<Node> {
        self.nodes.insert(key.into(), node)
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.nodes.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Direct children in document order
    pub fn iter(&self) -> Iter<'_, String, Node> {
        self.nodes.iter()
    }

    /// Deep-merges `other` into `self`
    ///
    /// Branches present on both sides are merged key by key; on any other
    /// collision the node from `other` wins. New keys are appended.
    pub fn merge(&mut self, other: Taxonomy) {
        for (key, incoming) in other.nodes {
            match self.nodes.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(incoming);
                }
                Entry::Occupied(mut slot) => {
                    let key = slot.key().clone();
                    match (slot.get_mut(), incoming) {
                        (Node::Branch(existing), Node::Branch(incoming)) => existing.merge(incoming),
                        (current, incoming) => {
                            if current.is_branch() != incoming.is_branch() {
                                tracing::debug!(
                                    "Replacing {} at {} with a {}",
                                    current.kind(),
                                    key,
                                    incoming.kind()
                                );
                            }
                            *current = incoming;
                        }
                    }
                }
            }
        }
    }

    /// Lazily enumerates every leaf with its ancestor path, depth first
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves::new(self)
    }

    /// Leaf names in traversal order, duplicates included
    pub fn leaf_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.leaves().map(|leaf| leaf.name)
    }

    /// Leaf names with duplicates removed, keeping first appearance order
    pub fn unique_leaf_names(&self) -> Vec<&str> {
        self.leaf_names()
            .collect::<indexmap::IndexSet<&str>>()
            .into_iter()
            .collect()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }
}

impl<K: Into<String>> FromIterator<(K, Node)> for Taxonomy {
    fn from_iter<T: IntoIterator<Item = (K, Node)>>(iter: T) -> Self {
        Self {
            nodes: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Taxonomy {
    type Item = (&'a String, &'a Node);
    type IntoIter = Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
