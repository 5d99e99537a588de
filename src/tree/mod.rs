//! Flatten a [`Node`] tree into display lines with tree-drawing glyphs.
//!
//! Within a folder the `__files__` list comes first in input order, followed
//! by subfolders and then null-valued files, each group sorted by name.

use std::fmt;

use log::debug;

use crate::document::{Mapping, Node};

/// Connector for an entry that has later siblings.
pub const BRANCH: &str = "├─";
/// Connector for the final entry of a sibling group.
pub const LAST_BRANCH: &str = "└─";
/// Prefix extension under an entry that has later siblings.
pub const CONTINUATION: &str = "│  ";
/// Prefix extension under the final entry of a sibling group.
pub const GAP: &str = "   ";

/// Return the connector for an entry.
#[must_use]
pub fn branch(last: bool) -> &'static str {
    Glyph::for_position(last).as_str()
}

/// Return the prefix extension used for the children of an entry.
#[must_use]
pub fn next_prefix(last: bool) -> &'static str {
    if last { GAP } else { CONTINUATION }
}

/// Connector drawn in front of a line's label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Branch,
    LastBranch,
}

impl Glyph {
    #[must_use]
    pub fn for_position(last: bool) -> Self {
        if last { Self::LastBranch } else { Self::Branch }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Branch => BRANCH,
            Self::LastBranch => LAST_BRANCH,
        }
    }

    #[must_use]
    pub fn is_last(self) -> bool {
        matches!(self, Self::LastBranch)
    }
}

/// What a display line stands for; decides how the label is spelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Entry of a `__files__` list or of a pure sequence: `├─ name`.
    Listed(String),
    /// Subfolder: `├─name/`.
    Directory(String),
    /// Mapping key bound to null: `├─name`.
    File(String),
}

/// One row of the diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub prefix: String,
    pub glyph: Glyph,
    pub kind: LineKind,
}

impl TreeLine {
    fn new(prefix: &str, last: bool, kind: LineKind) -> Self {
        Self {
            prefix: prefix.to_string(),
            glyph: Glyph::for_position(last),
            kind,
        }
    }

    /// Nesting depth, derived from the three-column prefix segments.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.prefix.chars().count() / GAP.len()
    }
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix)?;
        f.write_str(self.glyph.as_str())?;
        match &self.kind {
            LineKind::Listed(name) => write!(f, " {name}"),
            LineKind::Directory(name) => write!(f, "{name}/"),
            LineKind::File(name) => f.write_str(name),
        }
    }
}

/// Flatten a document from the root (empty prefix).
#[must_use]
pub fn flatten(node: &Node) -> Vec<TreeLine> {
    let mut lines = Vec::new();
    flatten_into(node, "", &mut lines);
    lines
}

/// Flatten a document and format every line.
#[must_use]
pub fn render_lines(node: &Node) -> Vec<String> {
    flatten(node).iter().map(ToString::to_string).collect()
}

/// Append the lines for `node` to `lines`, indenting with `prefix`.
pub fn flatten_into(node: &Node, prefix: &str, lines: &mut Vec<TreeLine>) {
    match node {
        Node::Mapping(mapping) => flatten_mapping(mapping, prefix, lines),
        Node::Sequence(items) => {
            let names: Vec<&str> = items.iter().filter_map(Node::as_leaf).collect();
            push_listed(&names, prefix, lines);
        }
        Node::Null | Node::Leaf(_) => {
            debug!(
                "no lines for {node:?} at depth {}",
                prefix.chars().count() / GAP.len()
            );
        }
    }
}

fn flatten_mapping(mapping: &Mapping, prefix: &str, lines: &mut Vec<TreeLine>) {
    let listed: Vec<&str> = mapping.files().iter().map(String::as_str).collect();
    push_listed(&listed, prefix, lines);

    // Entries iterate in key order, so both groups come out sorted.
    let (files, dirs): (Vec<_>, Vec<_>) =
        mapping.entries().partition(|(_, node)| node.is_null());
    let total = dirs.len() + files.len();

    for (index, (name, child)) in dirs.iter().enumerate() {
        // A folder is never last while null-valued files follow it.
        let last = index + 1 == total && files.is_empty();
        lines.push(TreeLine::new(prefix, last, LineKind::Directory((*name).to_string())));
        let child_prefix = format!("{prefix}{}", next_prefix(last));
        flatten_into(child, &child_prefix, lines);
    }

    for (index, (name, _)) in files.iter().enumerate() {
        let last = index + 1 == files.len();
        lines.push(TreeLine::new(prefix, last, LineKind::File((*name).to_string())));
    }
}

fn push_listed(names: &[&str], prefix: &str, lines: &mut Vec<TreeLine>) {
    for (index, name) in names.iter().enumerate() {
        let last = index + 1 == names.len();
        lines.push(TreeLine::new(prefix, last, LineKind::Listed((*name).to_string())));
    }
}

#[cfg(test)]
mod tests;
