//! File tree reconstruction from flat listings

pub mod builder;
pub mod stats;

pub use builder::{build_tree, TreeBuild, TreeBuilder};
pub use stats::{flatten, TreeStats};
