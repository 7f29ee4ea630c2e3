//! Reconstruction of a file/folder forest from a flat repository listing.
//!
//! Records are processed shallowest-first so every listed directory exists
//! before anything beneath it is attached. Nodes live in an index arena while
//! attaching and are materialized into owned [`TreeNode`]s at the end, with
//! siblings sorted directories-first, then by name.

use crate::models::listing::{EntryKind, PathRecord, TreeNode};
use codescope_utils::{file_name, parent_path, path_depth};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Result of a build, including the inputs that needed a fallback policy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreeBuild {
    /// Top-level nodes in display order
    pub forest: Vec<TreeNode>,
    /// Paths whose parent directory was not listed. They were attached to
    /// the nearest listed directory ancestor, or to the forest root.
    pub orphans: Vec<String>,
    /// Paths listed more than once. The last record in input order was kept.
    pub duplicates: Vec<String>,
}

/// Arena slot: the record currently occupying a path plus child slot indices
struct Slot<'a> {
    record: &'a PathRecord,
    children: Vec<usize>,
}

/// Builds [`TreeNode`] forests from [`PathRecord`] listings
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder;

impl TreeBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the forest, discarding diagnostics
    pub fn build(&self, records: &[PathRecord]) -> Vec<TreeNode> {
        self.build_with_report(records).forest
    }

    /// Build the forest and report orphaned and duplicate paths
    pub fn build_with_report(&self, records: &[PathRecord]) -> TreeBuild {
        // Stable sort: duplicates keep their input order, so the later one wins.
        let mut ordered: Vec<&PathRecord> = records.iter().collect();
        ordered.sort_by(|a, b| {
            path_depth(&a.path)
                .cmp(&path_depth(&b.path))
                .then_with(|| a.path.cmp(&b.path))
        });

        let mut slots: Vec<Slot<'_>> = Vec::with_capacity(ordered.len());
        let mut by_path: HashMap<&str, usize> = HashMap::with_capacity(ordered.len());
        let mut roots: Vec<usize> = Vec::new();
        let mut orphans = Vec::new();
        let mut duplicates = Vec::new();

        for record in ordered {
            if let Some(&existing) = by_path.get(record.path.as_str()) {
                warn!(path = %record.path, "duplicate path in listing, keeping the later record");
                duplicates.push(record.path.clone());
                slots[existing].record = record;
                continue;
            }

            let index = slots.len();
            slots.push(Slot {
                record,
                children: Vec::new(),
            });

            match parent_path(&record.path) {
                None => roots.push(index),
                Some(parent) => match nearest_directory(parent, &by_path, &slots) {
                    Some((ancestor, true)) => slots[ancestor].children.push(index),
                    Some((ancestor, false)) => {
                        warn!(
                            path = %record.path,
                            ancestor = %slots[ancestor].record.path,
                            "parent directory not listed, attaching to nearest listed ancestor"
                        );
                        orphans.push(record.path.clone());
                        slots[ancestor].children.push(index);
                    }
                    None => {
                        warn!(path = %record.path, "no listed ancestor, attaching to root");
                        orphans.push(record.path.clone());
                        roots.push(index);
                    }
                },
            }

            by_path.insert(record.path.as_str(), index);
        }

        let mut forest: Vec<TreeNode> = roots
            .iter()
            .map(|&index| materialize(&slots, index))
            .collect();
        forest.sort_by(TreeNode::display_order);

        debug!(
            records = records.len(),
            roots = forest.len(),
            orphans = orphans.len(),
            duplicates = duplicates.len(),
            "built file tree"
        );

        TreeBuild {
            forest,
            orphans,
            duplicates,
        }
    }
}

/// Walk up from `start` to the first listed directory.
///
/// Returns the slot index and whether it is `start` itself (the direct
/// parent). Listed files are skipped since they cannot hold children.
fn nearest_directory(
    start: &str,
    by_path: &HashMap<&str, usize>,
    slots: &[Slot<'_>],
) -> Option<(usize, bool)> {
    let mut candidate = Some(start);
    let mut direct = true;
    while let Some(path) = candidate {
        if let Some(&index) = by_path.get(path) {
            if slots[index].record.kind.is_directory() {
                return Some((index, direct));
            }
        }
        direct = false;
        candidate = parent_path(path);
    }
    None
}

fn materialize(slots: &[Slot<'_>], index: usize) -> TreeNode {
    let slot = &slots[index];
    let record = slot.record;

    let children = match record.kind {
        EntryKind::Directory => {
            let mut children: Vec<TreeNode> = slot
                .children
                .iter()
                .map(|&child| materialize(slots, child))
                .collect();
            children.sort_by(TreeNode::display_order);
            Some(children)
        }
        EntryKind::File => None,
    };

    TreeNode {
        name: file_name(&record.path).to_string(),
        path: record.path.clone(),
        kind: record.kind,
        size: record.size,
        children,
    }
}

/// Build a sorted forest from a flat listing
pub fn build_tree(records: &[PathRecord]) -> Vec<TreeNode> {
    TreeBuilder::new().build(records)
}
