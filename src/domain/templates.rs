/// Template alias collection
///
/// A WikiProject's banner lives at `Template:<name>`. Other templates that
/// redirect to it are aliases. Names are kept without the `Template:`
/// namespace prefix.

use std::collections::BTreeSet;

use crate::shared::protocol::LinksHerePage;

pub const TEMPLATE_PREFIX: &str = "Template:";

/// Namespace id of templates
pub const TEMPLATE_NAMESPACE: i64 = 10;

/// Templates found for one WikiProject
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateLookup {
    /// The template itself, `None` if it does not exist
    pub canonical: Option<String>,

    /// Templates redirecting to it
    pub aliases: BTreeSet<String>,
}

impl TemplateLookup {
    /// Records one batch of a `prop=linkshere` response
    ///
    /// Only the first batch decides the canonical name; later batches only
    /// add aliases.
    pub fn absorb(&mut self, page: &LinksHerePage, first_batch: bool) {
        if first_batch && !page.missing {
            self.canonical = Some(strip_template_prefix(&page.title).to_string());
        }
        self.aliases.extend(
            page.linkshere
                .iter()
                .map(|link| strip_template_prefix(&link.title).to_string()),
        );
    }

    /// Canonical name and aliases, sorted
    pub fn names(&self) -> BTreeSet<String> {
        let mut names = self.aliases.clone();
        names.extend(self.canonical.iter().cloned());
        names
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_none() && self.aliases.is_empty()
    }
}

/// `Template:Foo` -> `Foo`; titles outside the namespace are kept whole
pub fn strip_template_prefix(title: &str) -> &str {
    title.strip_prefix(TEMPLATE_PREFIX).unwrap_or(title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::protocol::LinkHere;

    fn page(title: &str, missing: bool, links: &[&str]) -> LinksHerePage {
        LinksHerePage {
            title: title.to_string(),
            missing,
            linkshere: links
                .iter()
                .map(|t| LinkHere { title: t.to_string() })
                .collect(),
        }
    }

    #[test]
    fn test_canonical_and_aliases() {
        let mut lookup = TemplateLookup::default();
        lookup.absorb(
            &page("Template:WikiProject Physics", false, &["Template:WPPhysics", "Template:Physics"]),
            true,
        );

        assert_eq!(lookup.canonical.as_deref(), Some("WikiProject Physics"));
        let names: Vec<String> = lookup.names().into_iter().collect();
        assert_eq!(names, vec!["Physics", "WPPhysics", "WikiProject Physics"]);
    }

    #[test]
    fn test_missing_template_has_no_canonical() {
        let mut lookup = TemplateLookup::default();
        lookup.absorb(&page("Template:WikiProject Nope", true, &[]), true);
        assert!(lookup.is_empty());
        assert!(lookup.names().is_empty());
    }

    #[test]
    fn test_later_batches_only_add_aliases() {
        let mut lookup = TemplateLookup::default();
        lookup.absorb(&page("Template:WP Foo", false, &["Template:A"]), true);
        lookup.absorb(&page("Template:Something else", false, &["Template:B"]), false);

        assert_eq!(lookup.canonical.as_deref(), Some("WP Foo"));
        assert_eq!(lookup.aliases.len(), 2);
    }

    #[test]
    fn test_strip_prefix() {
        assert_eq!(strip_template_prefix("Template:Foo"), "Foo");
        assert_eq!(strip_template_prefix("Foo"), "Foo");
    }
}
