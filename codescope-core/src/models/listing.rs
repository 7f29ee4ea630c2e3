//! Repository listings and the file tree built from them.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Kind of a listing entry.
///
/// Source-hosting tree APIs call these `blob` and `tree`; both spellings are
/// accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[serde(alias = "blob")]
    File,
    #[serde(alias = "tree", alias = "dir")]
    Directory,
}

impl EntryKind {
    pub fn is_directory(self) -> bool {
        self == Self::Directory
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "directory"),
        }
    }
}

/// One entry of a flat repository listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRecord {
    /// Slash-delimited path without a leading slash
    pub path: String,
    #[serde(alias = "type")]
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Opaque identifier assigned by the listing source
    #[serde(default, alias = "sha")]
    pub id: String,
}

impl PathRecord {
    /// Create a file record
    pub fn file(path: impl Into<String>, size: Option<u64>) -> Self {
        let path = path.into();
        Self {
            id: path.clone(),
            path,
            kind: EntryKind::File,
            size,
        }
    }

    /// Create a directory record
    pub fn directory(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            id: path.clone(),
            path,
            kind: EntryKind::Directory,
            size: None,
        }
    }
}

/// Node of the reconstructed file/folder hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Final path segment
    pub name: String,
    /// Full path
    pub path: String,
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Present only for directories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    pub fn is_directory(&self) -> bool {
        self.kind.is_directory()
    }

    /// Children in display order, empty for files
    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Sibling order: directories first, then by name (ordinal, case-sensitive)
    pub fn display_order(a: &Self, b: &Self) -> Ordering {
        match (a.is_directory(), b.is_directory()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a.name.cmp(&b.name),
        }
    }
}

/// Parse a JSON listing.
///
/// Accepts either a bare array of records or an object carrying the array
/// under `tree`, which is the shape recursive tree APIs return.
pub fn parse_listing(json: &str) -> crate::Result<Vec<PathRecord>> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Listing {
        Bare(Vec<PathRecord>),
        Wrapped { tree: Vec<PathRecord> },
    }

    match serde_json::from_str::<Listing>(json) {
        Ok(Listing::Bare(records) | Listing::Wrapped { tree: records }) => Ok(records),
        Err(e) => Err(crate::Error::Parse(format!("invalid listing: {e}"))),
    }
}

/// Read and parse a JSON listing file.
pub fn load_listing(path: &std::path::Path) -> crate::Result<Vec<PathRecord>> {
    let content = std::fs::read_to_string(path)?;
    parse_listing(&content)
}
