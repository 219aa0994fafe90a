/// Print Nodes Use Case
///
/// Writes the category outline of a taxonomy. No remote lookups.

use std::io::{self, Write};

use crate::domain::taxonomy::{node_lines, Taxonomy};

#[derive(Debug, Default)]
pub struct PrintNodesUseCase;

impl PrintNodesUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Writes one line per key; returns the number of lines written
    pub fn execute<W: Write>(&self, taxonomy: &Taxonomy, out: &mut W) -> io::Result<usize> {
        let lines = node_lines(taxonomy);
        for line in &lines {
            writeln!(out, "{}", line)?;
        }
        Ok(lines.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::taxonomy::Node;

    #[test]
    fn test_writes_outline() {
        let taxonomy = Taxonomy::from_iter([
            ("Geography", Node::leaves(["WikiProject Geography"])),
            (
                "Culture",
                Node::Branch(Taxonomy::from_iter([("Music", Node::leaves(["WikiProject Music"]))])),
            ),
        ]);

        let mut out = Vec::new();
        let written = PrintNodesUseCase::new().execute(&taxonomy, &mut out).unwrap();

        assert_eq!(written, 3);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            " - Culture\n   - Music\n - Geography\n"
        );
    }
}
