use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::Deserialize;
use serde_yaml::{Deserializer, Value};

use super::{FILES_KEY, Mapping, Node};
use crate::error::{Error, Result};

const ROOT_LOCATION: &str = "<root>";

/// Read and decode a layout document from disk.
pub fn load(path: &Path) -> Result<Node> {
    let raw = fs::read_to_string(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", raw.len(), path.display());
    decode(&raw, &path.display().to_string())
}

/// Decode a layout document from an in-memory YAML string.
pub fn from_str(source: &str) -> Result<Node> {
    decode(source, "<string>")
}

/// Only the first document of a multi-document stream is used, and merge
/// keys (`<<`) are expanded before conversion.
fn decode(source: &str, origin: &str) -> Result<Node> {
    if source.trim().is_empty() {
        return Ok(Node::Null);
    }
    let decode_error = |source: serde_yaml::Error| Error::Decode {
        origin: origin.to_string(),
        source,
    };

    let mut documents = Deserializer::from_str(source);
    let Some(first) = documents.next() else {
        return Ok(Node::Null);
    };
    if documents.next().is_some() {
        debug!("{origin} holds several documents; using the first");
    }

    let mut value = Value::deserialize(first).map_err(decode_error)?;
    value.apply_merge().map_err(decode_error)?;
    from_value(value)
}

/// Convert a generic YAML value into a [`Node`].
///
/// Scalars become leaves (numbers and booleans keep their YAML spelling),
/// tags are stripped, and entries of `__files__` or of a pure sequence that
/// are not scalars are dropped with a warning.
pub fn from_value(value: Value) -> Result<Node> {
    convert(value, ROOT_LOCATION)
}

fn convert(value: Value, location: &str) -> Result<Node> {
    match value {
        Value::Null => Ok(Node::Null),
        Value::Sequence(items) => Ok(Node::Sequence(leaf_entries(items, location))),
        Value::Mapping(mapping) => convert_mapping(mapping, location).map(Node::Mapping),
        Value::Tagged(tagged) => convert(tagged.value, location),
        scalar => match scalar_text(&scalar) {
            Some(text) => Ok(Node::Leaf(text)),
            None => Ok(Node::Null),
        },
    }
}

fn convert_mapping(mapping: serde_yaml::Mapping, location: &str) -> Result<Mapping> {
    let mut result = Mapping::new();

    for (key, value) in mapping {
        let Some(name) = scalar_text(&key) else {
            return Err(Error::InvalidKey {
                location: location.to_string(),
            });
        };

        if name == FILES_KEY {
            for file in listed_files(value, location) {
                result.push_file(file);
            }
            continue;
        }

        let child_location = child_location(location, &name);
        let node = convert(value, &child_location)?;
        if result.get(&name).is_some() {
            warn!("duplicate entry '{child_location}' replaces an earlier one");
        }
        result.insert(name, node);
    }

    Ok(result)
}

fn listed_files(value: Value, location: &str) -> Vec<String> {
    match value {
        Value::Sequence(items) => leaf_entries(items, location)
            .into_iter()
            .filter_map(|node| match node {
                Node::Leaf(name) => Some(name),
                _ => None,
            })
            .collect(),
        Value::Tagged(tagged) => listed_files(tagged.value, location),
        Value::Null => Vec::new(),
        _ => {
            warn!("ignoring {FILES_KEY} under '{location}': expected a list of file names");
            Vec::new()
        }
    }
}

fn leaf_entries(items: Vec<Value>, location: &str) -> Vec<Node> {
    let mut leaves = Vec::with_capacity(items.len());
    for item in items {
        let item = untag(item);
        match scalar_text(&item) {
            Some(name) => leaves.push(Node::Leaf(name)),
            None => warn!("skipping non-scalar list entry under '{location}'"),
        }
    }
    leaves
}

fn untag(value: Value) -> Value {
    match value {
        Value::Tagged(tagged) => untag(tagged.value),
        other => other,
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        _ => None,
    }
}

fn child_location(parent: &str, name: &str) -> String {
    if parent == ROOT_LOCATION {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}
