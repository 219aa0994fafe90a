/// Outline rendering of taxonomy keys
///
/// Every key becomes one line, indented two spaces per level, siblings
/// sorted. Leaf names are not listed.

use super::tree::{Node, Taxonomy};

/// Renders the outline of `taxonomy`, one entry per key
pub fn node_lines(taxonomy: &Taxonomy) -> Vec<String> {
    let mut lines = Vec::new();
    push_lines(taxonomy, 0, &mut lines);
    lines
}

fn push_lines(taxonomy: &Taxonomy, depth: usize, lines: &mut Vec<String>) {
    let mut children: Vec<(&String, &Node)> = taxonomy.iter().collect();
    children.sort_by(|a, b| a.0.cmp(b.0));

    for (key, node) in children {
        lines.push(format!("{} - {}", "  ".repeat(depth), key));
        if let Node::Branch(child) = node {
            push_lines(child, depth + 1, lines);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_level_indentation() {
        let taxonomy = Taxonomy::from_iter([
            (
                "Science",
                Node::Branch(Taxonomy::from_iter([
                    ("Physics", Node::leaves(["WikiProject Physics"])),
                    ("Biology", Node::leaves(["WikiProject Biology"])),
                ])),
            ),
            ("Arts", Node::leaves(["WikiProject Arts"])),
        ]);

        assert_eq!(
            node_lines(&taxonomy),
            vec![" - Arts", " - Science", "   - Biology", "   - Physics"]
        );
    }

    #[test]
    fn test_three_levels() {
        let taxonomy = Taxonomy::from_iter([(
            "A",
            Node::Branch(Taxonomy::from_iter([(
                "B",
                Node::Branch(Taxonomy::from_iter([("C", Node::leaves(["x"]))])),
            )])),
        )]);

        assert_eq!(node_lines(&taxonomy), vec![" - A", "   - B", "     - C"]);
    }

    #[test]
    fn test_empty() {
        assert!(node_lines(&Taxonomy::new()).is_empty());
    }
}
