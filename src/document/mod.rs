//! Decoded representation of a folder layout document.
//!
//! YAML is parsed with `serde_yaml` into its generic value model and converted
//! once into [`Node`]. All shape validation happens here so the flattener can
//! dispatch on the variant without re-checking types.

mod decode;

use std::collections::BTreeMap;

pub use decode::{from_str, from_value, load};

/// Reserved mapping key that lists plain file names attached to a folder.
pub const FILES_KEY: &str = "__files__";

/// A node of the layout document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A folder with optional listed files and named children.
    Mapping(Mapping),
    /// A pure list of file names.
    Sequence(Vec<Node>),
    /// Leaf marker: a mapping key bound to null is a file.
    Null,
    /// A file name.
    Leaf(String),
}

impl Node {
    /// Build a leaf from any string-like value.
    pub fn leaf(name: impl Into<String>) -> Self {
        Self::Leaf(name.into())
    }

    /// Build a sequence of leaves.
    pub fn files<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Sequence(names.into_iter().map(Self::leaf).collect())
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Return the file name when this node is a leaf.
    #[must_use]
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(name) => Some(name),
            _ => None,
        }
    }
}

impl From<Mapping> for Node {
    fn from(mapping: Mapping) -> Self {
        Self::Mapping(mapping)
    }
}

/// Folder contents: the `__files__` list in input order plus named entries.
///
/// Entries are kept in a `BTreeMap`, so iteration is always in ascending
/// byte-wise key order regardless of the order in the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    files: Vec<String>,
    entries: BTreeMap<String, Node>,
}

impl Mapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append names to the `__files__` list.
    #[must_use]
    pub fn with_files<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files.extend(names.into_iter().map(Into::into));
        self
    }

    /// Insert a named entry, replacing any previous entry with the same name.
    #[must_use]
    pub fn with_entry(mut self, name: impl Into<String>, node: impl Into<Node>) -> Self {
        self.insert(name, node);
        self
    }

    /// Insert a named entry bound to null, i.e. an isolated file.
    #[must_use]
    pub fn with_file_entry(self, name: impl Into<String>) -> Self {
        self.with_entry(name, Node::Null)
    }

    pub fn insert(&mut self, name: impl Into<String>, node: impl Into<Node>) {
        self.entries.insert(name.into(), node.into());
    }

    pub fn push_file(&mut self, name: impl Into<String>) {
        self.files.push(name.into());
    }

    /// Names listed under `__files__`, in input order.
    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Named entries in ascending key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(name, node)| (name.as_str(), node))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.entries.get(name)
    }
}
