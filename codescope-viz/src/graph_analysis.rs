//! Structural analysis of a projected graph
//!
//! Provides:
//! - Conversion into a petgraph `DiGraph` keyed by component id
//! - Dependency cycle detection via strongly connected components
//! - A summary of what the current view shows

use crate::projection::{ProjectedGraph, VisualEdge, VisualNode};
use codescope_core::{ComponentKind, Layer};
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Borrowed petgraph view of a projected graph
pub struct ViewGraph<'a> {
    pub graph: DiGraph<&'a VisualNode, &'a VisualEdge>,
    pub index: HashMap<&'a str, NodeIndex>,
}

impl<'a> ViewGraph<'a> {
    /// Build the petgraph view. Edges with an endpoint missing from the node
    /// list are skipped, which cannot happen for projector output.
    pub fn new(projected: &'a ProjectedGraph) -> Self {
        let mut graph = DiGraph::with_capacity(projected.nodes.len(), projected.edges.len());
        let mut index = HashMap::with_capacity(projected.nodes.len());

        for node in &projected.nodes {
            let idx = graph.add_node(node);
            index.insert(node.id(), idx);
        }

        for edge in &projected.edges {
            let from = index.get(edge.relationship.from.as_str());
            let to = index.get(edge.relationship.to.as_str());
            if let (Some(&from), Some(&to)) = (from, to) {
                graph.add_edge(from, to, edge);
            }
        }

        Self { graph, index }
    }

    /// Dependency cycles: strongly connected components with more than one
    /// member, plus self-loops. Member ids are sorted, cycles are sorted.
    pub fn cycles(&self) -> Vec<Vec<String>> {
        let mut cycles: Vec<Vec<String>> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|scc| scc.len() > 1 || self.graph.contains_edge(scc[0], scc[0]))
            .map(|scc| {
                let mut ids: Vec<String> =
                    scc.iter().map(|&idx| self.graph[idx].id().to_string()).collect();
                ids.sort();
                ids
            })
            .collect();
        cycles.sort();
        cycles
    }
}

/// Overview numbers for the current view
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes_by_kind: BTreeMap<ComponentKind, usize>,
    pub nodes_by_layer: BTreeMap<Layer, usize>,
    pub total_lines: u64,
    pub average_complexity: f64,
    pub cycles: Vec<Vec<String>>,
}

impl GraphSummary {
    pub fn of(projected: &ProjectedGraph) -> Self {
        let mut summary = Self {
            node_count: projected.nodes.len(),
            edge_count: projected.edges.len(),
            ..Self::default()
        };

        let mut complexity_total = 0.0;
        for node in &projected.nodes {
            let component = &node.component;
            *summary.nodes_by_kind.entry(component.kind).or_insert(0) += 1;
            *summary.nodes_by_layer.entry(component.layer).or_insert(0) += 1;
            summary.total_lines += component.line_count;
            complexity_total += component.complexity_score;
        }

        if summary.node_count > 0 {
            #[allow(clippy::cast_precision_loss)]
            let count = summary.node_count as f64;
            summary.average_complexity = complexity_total / count;
        }

        summary.cycles = ViewGraph::new(projected).cycles();
        summary
    }
}
