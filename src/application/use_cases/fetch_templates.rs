/// Fetch Templates Use Case
///
/// Maps each distinct WikiProject in a taxonomy to the names of its banner
/// template and the templates redirecting to it.
///
/// ## Workflow
/// 1. Collect distinct leaf names (a WikiProject listed under several
///    categories is queried once)
/// 2. Look up `Template:<name>` and its redirects on the worker pool
/// 3. Log failures and missing templates, keep going
/// 4. Report `name: ["Template A", "Template B"]` for every name with templates

use std::collections::BTreeSet;
use std::io::{self, Write};

use crate::application::services::WikiProjectLookup;
use crate::domain::taxonomy::Taxonomy;
use crate::domain::templates::TemplateLookup;
use crate::infrastructure::mediawiki::WikiApi;
use crate::infrastructure::worker_pool::WorkerPool;
use crate::shared::error::{ApiError, PoolError};

/// Templates found for one WikiProject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub name: String,
    pub templates: BTreeSet<String>,
}

/// One entry per distinct WikiProject, in first-appearance order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateReport {
    pub entries: Vec<TemplateEntry>,
}

impl TemplateReport {
    /// Report lines; WikiProjects without any template are skipped
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries
            .iter()
            .filter(|entry| !entry.templates.is_empty())
            .map(|entry| format_template_line(&entry.name, &entry.templates))
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

/// `name: ["a", "b"]`, with the list spaced and escaped the way Python's
/// `json.dumps` does
pub fn format_template_line(name: &str, templates: &BTreeSet<String>) -> String {
    let items: Vec<String> = templates.iter().map(|t| ascii_json_string(t)).collect();
    format!("{}: [{}]", name, items.join(", "))
}

/// JSON string literal with everything outside printable ASCII as `\uXXXX`
/// (UTF-16 code units, so astral characters become surrogate pairs)
fn ascii_json_string(value: &str) -> String {
    let quoted = serde_json::Value::from(value).to_string();
    let mut out = String::with_capacity(quoted.len());
    for c in quoted.chars() {
        if c.is_ascii() && c != '\u{7f}' {
            out.push(c);
        } else {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units).iter() {
                out.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    out
}

/// Fetch templates use case
pub struct FetchTemplatesUseCase<'a, A: WikiApi> {
    lookup: &'a WikiProjectLookup<A>,
    pool: &'a WorkerPool,
}

impl<'a, A: WikiApi> FetchTemplatesUseCase<'a, A> {
    pub fn new(lookup: &'a WikiProjectLookup<A>, pool: &'a WorkerPool) -> Self {
        Self { lookup, pool }
    }

    /// Looks up templates for every distinct leaf of `taxonomy`
    pub fn execute(&self, taxonomy: &Taxonomy) -> Result<TemplateReport, PoolError> {
        let names = taxonomy.unique_leaf_names();
        tracing::info!(
            "Fetching templates for {} WikiProjects on {} threads",
            names.len(),
            self.pool.worker_count()
        );

        let lookups = self.pool.map(&names, |name| self.lookup.templates(name))?;

        let entries = names
            .iter()
            .zip(lookups)
            .map(|(name, lookup)| TemplateEntry {
                name: name.to_string(),
                templates: collect_templates(name, lookup),
            })
            .collect();

        Ok(TemplateReport { entries })
    }
}

fn collect_templates(name: &str, lookup: Result<TemplateLookup, ApiError>) -> BTreeSet<String> {
    match lookup {
        Err(e) => {
            tracing::error!("Could not process {}: {}", name, e);
            BTreeSet::new()
        }
        Ok(lookup) => {
            if lookup.canonical.is_none() {
                tracing::warn!("Could not process {}: could not find main template", name);
            }
            lookup.names()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::taxonomy::Node;
    use crate::infrastructure::mediawiki::QueryParams;
    use parking_lot::Mutex;
    use serde_json::{json, Value};
    use std::collections::HashMap;

    /// Answers linkshere queries from a name -> document map and counts calls
    struct FakeWiki {
        templates: HashMap<String, Value>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeWiki {
        fn new(templates: &[(&str, Value)]) -> Self {
            Self {
                templates: templates
                    .iter()
                    .map(|(name, doc)| (format!("Template:{}", name), doc.clone()))
                    .collect(),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl WikiApi for FakeWiki {
        fn query(&self, params: &QueryParams) -> Result<Value, ApiError> {
            let title = params
                .iter()
                .find(|(k, _)| *k == "titles")
                .map(|(_, v)| v.clone())
                .unwrap_or_default();
            self.calls.lock().push(title.clone());
            Ok(self.templates.get(&title).cloned().unwrap_or_else(|| {
                json!({"query": {"pages": [{"title": title, "missing": true}]}})
            }))
        }
    }

    fn template(name: &str, aliases: &[&str]) -> Value {
        let links: Vec<Value> = aliases
            .iter()
            .map(|a| json!({"ns": 10, "title": format!("Template:{}", a)}))
            .collect();
        json!({"query": {"pages": [{"title": format!("Template:{}", name), "linkshere": links}]}})
    }

    #[test]
    fn test_duplicate_leaves_are_queried_once() {
        let taxonomy = Taxonomy::from_iter([
            ("Physics", Node::leaves(["WikiProject Physics", "WikiProject Astronomy"])),
            ("Space", Node::leaves(["WikiProject Astronomy"])),
        ]);
        let api = FakeWiki::new(&[
            ("WikiProject Physics", template("WikiProject Physics", &["WPPhysics"])),
            ("WikiProject Astronomy", template("WikiProject Astronomy", &[])),
        ]);
        let lookup = WikiProjectLookup::new(api);
        let pool = WorkerPool::with_workers(4);

        let report = FetchTemplatesUseCase::new(&lookup, &pool)
            .execute(&taxonomy)
            .unwrap();

        let mut calls = lookup.api().calls.lock().clone();
        calls.sort();
        assert_eq!(
            calls,
            vec!["Template:WikiProject Astronomy", "Template:WikiProject Physics"]
        );
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].name, "WikiProject Physics");
    }

    #[test]
    fn test_lines_skip_empty_sets() {
        let taxonomy = Taxonomy::from_iter([(
            "Culture",
            Node::leaves(["WikiProject Music", "WikiProject Nothing"]),
        )]);
        let api = FakeWiki::new(&[(
            "WikiProject Music",
            template("WikiProject Music", &["WPMusic", "Music"]),
        )]);
        let lookup = WikiProjectLookup::new(api);
        let pool = WorkerPool::with_workers(2);

        let report = FetchTemplatesUseCase::new(&lookup, &pool)
            .execute(&taxonomy)
            .unwrap();

        let lines: Vec<String> = report.lines().collect();
        assert_eq!(
            lines,
            vec![r#"WikiProject Music: ["Music", "WPMusic", "WikiProject Music"]"#]
        );
    }

    #[test]
    fn test_api_error_yields_empty_set() {
        struct Broken;
        impl WikiApi for Broken {
            fn query(&self, _params: &QueryParams) -> Result<Value, ApiError> {
                Ok(json!({"error": {"code": "internal_api_error", "info": "boom"}}))
            }
        }

        let taxonomy = Taxonomy::from_iter([("A", Node::leaves(["WikiProject A"]))]);
        let lookup = WikiProjectLookup::new(Broken);
        let pool = WorkerPool::with_workers(1);

        let report = FetchTemplatesUseCase::new(&lookup, &pool)
            .execute(&taxonomy)
            .unwrap();
        assert!(report.entries[0].templates.is_empty());
        assert_eq!(report.lines().count(), 0);
    }

    #[test]
    fn test_format_template_line_escapes() {
        let templates: BTreeSet<String> = ["Say \"hi\"".to_string(), "Plain".to_string()].into();
        assert_eq!(
            format_template_line("WikiProject Q", &templates),
            r#"WikiProject Q: ["Plain", "Say \"hi\""]"#
        );
    }

    #[test]
    fn test_format_template_line_escapes_non_ascii() {
        let templates: BTreeSet<String> = ["Zürich".to_string(), "Musik 🎵".to_string()].into();
        assert_eq!(
            format_template_line("WikiProject Zürich", &templates),
            r#"WikiProject Zürich: ["Musik \ud83c\udfb5", "Z\u00fcrich"]"#
        );
    }

    #[test]
    fn test_format_template_line_escapes_control_characters() {
        let templates: BTreeSet<String> = ["tab\there".to_string(), "del\u{7f}".to_string()].into();
        assert_eq!(
            format_template_line("WP", &templates),
            r#"WP: ["del\u007f", "tab\there"]"#
        );
    }

    #[test]
    fn test_write_to() {
        let report = TemplateReport {
            entries: vec![TemplateEntry {
                name: "WikiProject Jazz".to_string(),
                templates: ["WikiProject Jazz".to_string()].into(),
            }],
        };
        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "WikiProject Jazz: [\"WikiProject Jazz\"]\n");
    }
}
