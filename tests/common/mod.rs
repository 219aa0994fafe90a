#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;

use parking_lot::Mutex;
use serde_json::{json, Value};
use tempfile::TempDir;
use wikiproject_taxonomy::infrastructure::mediawiki::{QueryParams, WikiApi};
use wikiproject_taxonomy::shared::error::ApiError;

/// In-memory wiki answering by the `titles` parameter
#[derive(Default)]
pub struct FakeWiki {
    documents: HashMap<String, Value>,
    pub requested: Mutex<Vec<String>>,
}

impl FakeWiki {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the document returned for `title`
    pub fn with(mut self, title: &str, doc: Value) -> Self {
        self.documents.insert(title.to_string(), doc);
        self
    }

    pub fn with_page(self, name: &str, length: u64) -> Self {
        let title = format!("Wikipedia:{}", name);
        let doc = json!({"query": {"pages": [{"ns": 4, "title": title, "length": length}]}});
        self.with(&title, doc)
    }

    pub fn with_template(self, name: &str, aliases: &[&str]) -> Self {
        let title = format!("Template:{}", name);
        let links: Vec<Value> = aliases
            .iter()
            .map(|a| json!({"ns": 10, "title": format!("Template:{}", a)}))
            .collect();
        let doc = json!({"query": {"pages": [{"ns": 10, "title": title, "linkshere": links}]}});
        self.with(&title, doc)
    }

    pub fn requests_for(&self, title: &str) -> usize {
        self.requested.lock().iter().filter(|t| *t == title).count()
    }
}

impl WikiApi for FakeWiki {
    fn query(&self, params: &QueryParams) -> Result<Value, ApiError> {
        let title = params
            .iter()
            .find(|(key, _)| *key == "titles")
            .map(|(_, value)| value.clone())
            .ok_or_else(|| ApiError::Malformed("no titles parameter".to_string()))?;
        self.requested.lock().push(title.clone());

        Ok(self.documents.get(&title).cloned().unwrap_or_else(|| {
            json!({"query": {"pages": [{"title": title, "missing": true}]}})
        }))
    }
}

/// Writes taxonomy documents into a temporary directory
pub struct TaxonomyFiles {
    dir: TempDir,
    pub paths: Vec<PathBuf>,
}

impl TaxonomyFiles {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
            paths: Vec::new(),
        }
    }

    pub fn add(mut self, name: &str, yaml: &str) -> Self {
        let path = self.dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("create taxonomy file");
        file.write_all(yaml.as_bytes()).expect("write taxonomy file");
        self.paths.push(path);
        self
    }
}
