//! Core data models for CodeScope.
//!
//! - `listing`: flat repository listings and the reconstructed file tree
//! - `architecture`: components and relationships of an analyzed codebase
//! - `view_config`: the user-selected filters and options for the graph view

pub mod architecture;
pub mod listing;
pub mod view_config;

pub use architecture::{
    ArchitectureModel, ComponentKind, ComponentNode, Layer, Relationship, RelationshipKind,
};
pub use listing::{EntryKind, PathRecord, TreeNode};
pub use view_config::{CategoryFilter, ViewConfig, ViewMode};
