/// Taxonomy Loader
///
/// Reads one or more YAML documents and merges them, in the order given,
/// into a single [`Taxonomy`]. Later documents win on conflicts; branches
/// present in several documents are merged key by key. YAML merge keys
/// (`<<: *anchor`) are expanded before the document is read.
///
/// ## Document shape
/// ```yaml
/// Culture:
///   Music:
///     - WikiProject Music
///     - WikiProject Jazz
/// Geography:
///   - WikiProject Geography
/// ```

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::domain::taxonomy::{Node, Taxonomy};
use crate::shared::error::TaxonomyError;

/// Loads and merges every file in `paths`
pub fn load_taxonomy<P: AsRef<Path>>(paths: &[P]) -> Result<Taxonomy, TaxonomyError> {
    let mut taxonomy = Taxonomy::new();
    for path in paths {
        taxonomy.merge(load_file(path.as_ref())?);
    }
    Ok(taxonomy)
}

/// Loads a single taxonomy file
pub fn load_file(path: &Path) -> Result<Taxonomy, TaxonomyError> {
    tracing::debug!("Reading taxonomy file {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|source| TaxonomyError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_taxonomy(&content, &path.display().to_string())
}

/// Parses a taxonomy document; `origin` names it in error messages
pub fn parse_taxonomy(yaml: &str, origin: &str) -> Result<Taxonomy, TaxonomyError> {
    let yaml_error = |source: serde_yaml::Error| TaxonomyError::Yaml {
        origin: origin.to_string(),
        source,
    };

    let mut document: Value = serde_yaml::from_str(yaml).map_err(yaml_error)?;
    document.apply_merge().map_err(yaml_error)?;

    match document {
        Value::Null => {
            tracing::debug!("{} is empty", origin);
            Ok(Taxonomy::new())
        }
        Value::Mapping(mapping) => convert_mapping(mapping, &mut Vec::new()),
        other => Err(TaxonomyError::Shape {
            path: "<root>".to_string(),
            found: value_kind(&other),
        }),
    }
}

fn convert_mapping(mapping: Mapping, path: &mut Vec<String>) -> Result<Taxonomy, TaxonomyError> {
    let mut taxonomy = Taxonomy::new();

    for (key, value) in mapping {
        let key = key_to_string(&key).ok_or_else(|| TaxonomyError::Shape {
            path: dotted(path, "<key>"),
            found: value_kind(&key),
        })?;

        path.push(key.clone());
        let node = convert_value(value, path);
        path.pop();
        taxonomy.insert(key, node?);
    }

    Ok(taxonomy)
}

fn convert_value(value: Value, path: &mut Vec<String>) -> Result<Node, TaxonomyError> {
    match value {
        Value::Mapping(mapping) => Ok(Node::Branch(convert_mapping(mapping, path)?)),
        Value::Sequence(items) => {
            let mut names = Vec::with_capacity(items.len());
            for (index, item) in items.into_iter().enumerate() {
                match item {
                    Value::String(name) => names.push(name),
                    other => {
                        return Err(TaxonomyError::Shape {
                            path: format!("{}[{}]", path.join("."), index),
                            found: value_kind(&other),
                        })
                    }
                }
            }
            Ok(Node::Leaves(names))
        }
        other => Err(TaxonomyError::Shape {
            path: path.join("."),
            found: value_kind(&other),
        }),
    }
}

fn key_to_string(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn dotted(path: &[String], last: &str) -> String {
    if path.is_empty() {
        last.to_string()
    } else {
        format!("{}.{}", path.join("."), last)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
