//! Aggregate numbers and row flattening for the file explorer.

use crate::models::listing::TreeNode;
use serde::{Deserialize, Serialize};

/// Summary of a built forest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    pub files: usize,
    pub directories: usize,
    /// Sum of known file sizes in bytes
    pub total_size: u64,
    /// Deepest nesting level; top-level nodes are at depth 1
    pub max_depth: usize,
}

impl TreeStats {
    pub fn collect(forest: &[TreeNode]) -> Self {
        let mut stats = Self::default();
        for node in forest {
            stats.visit(node, 1);
        }
        stats
    }

    fn visit(&mut self, node: &TreeNode, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
        if node.is_directory() {
            self.directories += 1;
            for child in node.children() {
                self.visit(child, depth + 1);
            }
        } else {
            self.files += 1;
            self.total_size += node.size.unwrap_or(0);
        }
    }
}

/// Depth-first rows in display order, paired with their nesting depth (0 = top level)
pub fn flatten(forest: &[TreeNode]) -> Vec<(usize, &TreeNode)> {
    fn walk<'a>(nodes: &'a [TreeNode], depth: usize, rows: &mut Vec<(usize, &'a TreeNode)>) {
        for node in nodes {
            rows.push((depth, node));
            walk(node.children(), depth + 1, rows);
        }
    }

    let mut rows = Vec::new();
    walk(forest, 0, &mut rows);
    rows
}
