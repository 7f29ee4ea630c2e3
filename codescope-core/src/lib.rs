//! CodeScope Core - Data Model and Tree Reconstruction
//!
//! This crate provides:
//! - The data model shared by every CodeScope component (path listings,
//!   file trees, architecture components and relationships, view settings)
//! - The tree builder that turns a flat, unordered repository listing into a
//!   sorted file/folder forest
//! - Tree statistics for the file explorer
//!
//! Everything here is synchronous and free of I/O except the explicit
//! `*_file` loaders.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod models;
pub mod tree;

pub use models::{
    architecture::{
        ArchitectureModel, ComponentKind, ComponentNode, Layer, Relationship, RelationshipKind,
    },
    listing::{load_listing, parse_listing, EntryKind, PathRecord, TreeNode},
    view_config::{CategoryFilter, ViewConfig, ViewMode},
};
pub use tree::{build_tree, flatten, TreeBuild, TreeBuilder, TreeStats};

/// Result type used throughout CodeScope core
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for CodeScope core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input could not be interpreted
    #[error("Parse error: {0}")]
    Parse(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Utility error
    #[error("Utility error: {0}")]
    Util(#[from] codescope_utils::UtilError),
}
