/// Depth-first leaf walker
///
/// Yields `(path, leaf)` pairs lazily. The walker keeps one frame per open
/// branch, so memory is bounded by the depth of the taxonomy.

use std::fmt;

use indexmap::map::Iter;

use super::tree::{Node, Taxonomy};

/// A leaf name together with the keys of its ancestors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafRecord<'a> {
    pub path: Vec<&'a str>,
    pub name: &'a str,
}

impl LeafRecord<'_> {
    /// `path.join(".") + "." + name`
    pub fn dotted(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LeafRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in &self.path {
            write!(f, "{}.", key)?;
        }
        f.write_str(self.name)
    }
}

enum Frame<'a> {
    Branch {
        path: Vec<&'a str>,
        entries: Iter<'a, String, Node>,
    },
    Leaves {
        path: Vec<&'a str>,
        names: std::slice::Iter<'a, String>,
    },
}

/// Iterator over every leaf of a taxonomy
pub struct Leaves<'a> {
    stack: Vec<Frame<'a>>,
}

impl<'a> Leaves<'a> {
    pub fn new(taxonomy: &'a Taxonomy) -> Self {
        Self {
            stack: vec![Frame::Branch {
                path: Vec::new(),
                entries: taxonomy.iter(),
            }],
        }
    }
}

impl<'a> Iterator for Leaves<'a> {
    type Item = LeafRecord<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            let child = match frame {
                Frame::Leaves { path, names } => match names.next() {
                    Some(name) => {
                        return Some(LeafRecord {
                            path: path.clone(),
                            name: name.as_str(),
                        })
                    }
                    None => None,
                },
                Frame::Branch { path, entries } => match entries.next() {
                    Some((key, node)) => {
                        let mut child_path = path.clone();
                        child_path.push(key.as_str());
                        Some(match node {
                            Node::Branch(taxonomy) => Frame::Branch {
                                path: child_path,
                                entries: taxonomy.iter(),
                            },
                            Node::Leaves(names) => Frame::Leaves {
                                path: child_path,
                                names: names.iter(),
                            },
                        })
                    }
                    None => None,
                },
            };

            match child {
                Some(frame) => self.stack.push(frame),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Taxonomy {
        Taxonomy::from_iter([
            (
                "Culture",
                Node::Branch(Taxonomy::from_iter([
                    ("Music", Node::leaves(["WikiProject Music", "WikiProject Jazz"])),
                    (
                        "Arts",
                        Node::Branch(Taxonomy::from_iter([(
                            "Visual arts",
                            Node::leaves(["WikiProject Visual arts"]),
                        )])),
                    ),
                ])),
            ),
            ("Geography", Node::leaves(["WikiProject Geography"])),
        ])
    }

    #[test]
    fn test_enumerates_every_leaf_with_path() {
        let taxonomy = sample();
        let leaves: Vec<(Vec<&str>, &str)> =
            taxonomy.leaves().map(|l| (l.path, l.name)).collect();

        assert_eq!(
            leaves,
            vec![
                (vec!["Culture", "Music"], "WikiProject Music"),
                (vec!["Culture", "Music"], "WikiProject Jazz"),
                (vec!["Culture", "Arts", "Visual arts"], "WikiProject Visual arts"),
                (vec!["Geography"], "WikiProject Geography"),
            ]
        );
    }

    #[test]
    fn test_flat_taxonomy_each_leaf_once() {
        let taxonomy = Taxonomy::from_iter([
            ("A", Node::leaves(["a1", "a2"])),
            ("B", Node::leaves(["b1"])),
            ("C", Node::leaves(Vec::<String>::new())),
        ]);

        let dotted: Vec<String> = taxonomy.leaves().map(|l| l.dotted()).collect();
        assert_eq!(dotted, vec!["A.a1", "A.a2", "B.b1"]);
    }

    #[test]
    fn test_walker_is_lazy() {
        let taxonomy = sample();
        let mut leaves = taxonomy.leaves();
        let first = leaves.next().unwrap();
        assert_eq!(first.dotted(), "Culture.Music.WikiProject Music");
        // only the frames on the way to the first leaf are open
        assert_eq!(leaves.stack.len(), 3);
    }

    #[test]
    fn test_empty_taxonomy() {
        let taxonomy = Taxonomy::new();
        assert_eq!(taxonomy.leaves().next(), None);
    }
}
