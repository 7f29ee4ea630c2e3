//! DOT Format Export for Graph Visualization
//!
//! Renders a [`ProjectedGraph`] as Graphviz DOT, reusing the projected
//! colors, shapes, stroke widths and labels. Optional cycle highlighting and
//! per-layer clustering.

use crate::graph_analysis::ViewGraph;
use crate::palette::NodeShape;
use crate::projection::ProjectedGraph;
use codescope_core::Layer;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt::Write;

/// Points per inch in Graphviz sizing
const POINTS_PER_INCH: f64 = 72.0;

/// DOT exporter for projected architecture graphs
pub struct DotExporter {
    /// Draw edges inside dependency cycles in red
    pub show_cycles: bool,
    /// Group nodes into one cluster per layer when the view carries layer ranks
    pub cluster_by_layer: bool,
}

impl Default for DotExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DotExporter {
    pub fn new() -> Self {
        Self {
            show_cycles: true,
            cluster_by_layer: true,
        }
    }

    /// Builder pattern: enable/disable cycle highlighting
    pub fn with_cycle_highlighting(mut self, enabled: bool) -> Self {
        self.show_cycles = enabled;
        self
    }

    /// Builder pattern: enable/disable layer clustering
    pub fn with_layer_clustering(mut self, enabled: bool) -> Self {
        self.cluster_by_layer = enabled;
        self
    }

    pub fn export(&self, projected: &ProjectedGraph) -> String {
        let mut dot = String::from("digraph Architecture {\n");
        dot.push_str("  rankdir=TB;\n");
        dot.push_str("  node [style=\"filled\", fontname=\"Helvetica\"];\n");
        dot.push_str("  edge [fontname=\"Helvetica\", fontsize=10];\n\n");

        let positions: HashMap<&str, usize> = projected
            .nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (node.id(), idx))
            .collect();

        for (idx, node) in projected.nodes.iter().enumerate() {
            let diameter = 2.0 * node.radius / POINTS_PER_INCH;
            let _ = writeln!(
                dot,
                "  n{idx} [label=\"{}\", tooltip=\"{}\", shape={}, fillcolor=\"{}\", \
                 color=\"{}\", width={diameter:.2}];",
                escape_dot_label(&node.display_label),
                escape_dot_label(node.id()),
                dot_shape(node.shape),
                node.fill_color,
                node.border_color,
            );
        }

        dot.push('\n');

        let cyclic = if self.show_cycles {
            cycle_members(projected)
        } else {
            Vec::new()
        };

        for edge in &projected.edges {
            let rel = &edge.relationship;
            let (Some(&source), Some(&target)) =
                (positions.get(rel.from.as_str()), positions.get(rel.to.as_str()))
            else {
                continue;
            };

            let in_cycle = cyclic
                .iter()
                .any(|cycle| cycle.contains(rel.from.as_str()) && cycle.contains(rel.to.as_str()));
            let color = if in_cycle { "red" } else { edge.stroke_color.as_str() };

            let _ = writeln!(
                dot,
                "  n{source} -> n{target} [color=\"{color}\", penwidth=\"{:.1}\", tooltip=\"{}\"];",
                edge.stroke_width,
                rel.kind,
            );
        }

        if self.cluster_by_layer {
            let layers = group_by_layer(projected);
            for ((_, layer), members) in layers {
                let _ = writeln!(
                    dot,
                    "\n  subgraph cluster_{} {{",
                    sanitize_cluster_name(layer.as_str())
                );
                let _ = writeln!(dot, "    label=\"{}\";", escape_dot_label(layer.as_str()));
                dot.push_str("    style=dashed;\n");
                dot.push_str("    color=gray;\n");
                for idx in members {
                    let _ = writeln!(dot, "    n{idx};");
                }
                dot.push_str("  }\n");
            }
        }

        dot.push_str("}\n");
        dot
    }
}

/// Member sets of every dependency cycle
fn cycle_members(projected: &ProjectedGraph) -> Vec<HashSet<String>> {
    ViewGraph::new(projected)
        .cycles()
        .into_iter()
        .map(|cycle| cycle.into_iter().collect())
        .collect()
}

/// Node positions grouped by layer, ordered by hierarchy level. Only nodes
/// that carry a level (layers view) are clustered.
fn group_by_layer(projected: &ProjectedGraph) -> BTreeMap<(u8, Layer), Vec<usize>> {
    let mut layers: BTreeMap<(u8, Layer), Vec<usize>> = BTreeMap::new();
    for (idx, node) in projected.nodes.iter().enumerate() {
        if let Some(level) = node.hierarchy_level {
            layers.entry((level, node.component.layer)).or_default().push(idx);
        }
    }
    layers
}

fn dot_shape(shape: NodeShape) -> &'static str {
    match shape {
        NodeShape::Box => "box",
        NodeShape::Ellipse => "ellipse",
        NodeShape::Diamond => "diamond",
        NodeShape::Star => "star",
        NodeShape::Triangle => "triangle",
        NodeShape::Square => "square",
        NodeShape::Dot => "circle",
    }
}

/// Escape special characters for DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Sanitize cluster name for DOT subgraph identifier
fn sanitize_cluster_name(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;
    use codescope_core::{
        ComponentKind, ComponentNode, Relationship, RelationshipKind, ViewConfig, ViewMode,
    };

    fn sample(config: &ViewConfig) -> ProjectedGraph {
        let components = vec![
            ComponentNode::new(
                "ui",
                "Login \"Form\"",
                ComponentKind::Component,
                Layer::Presentation,
                "ui.tsx",
            ),
            ComponentNode::new("svc", "Auth", ComponentKind::Service, Layer::Business, "svc.ts"),
            ComponentNode::new("repo", "Repo", ComponentKind::Class, Layer::Data, "repo.ts"),
        ];
        let relationships = vec![
            Relationship::new("ui", "svc", RelationshipKind::Calls, 1.0),
            Relationship::new("svc", "repo", RelationshipKind::Uses, 1.0),
            Relationship::new("repo", "svc", RelationshipKind::Uses, 1.0),
        ];
        project(&components, &relationships, config)
    }

    #[test]
    fn test_export_empty_graph() {
        let dot = DotExporter::new().export(&ProjectedGraph::default());
        assert!(dot.starts_with("digraph Architecture {"));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn test_export_nodes_and_edges() {
        let dot = DotExporter::new().export(&sample(&ViewConfig::default()));
        assert!(dot.contains("n0 [label=\"Login \\\"Form\\\"\""));
        assert!(dot.contains("shape=star"));
        assert!(dot.contains("n0 -> n1"));
        assert!(!dot.contains("subgraph"));
    }

    #[test]
    fn test_cycle_edges_highlighted() {
        let graph = sample(&ViewConfig::default());
        let dot = DotExporter::new().export(&graph);
        assert!(dot.contains("n1 -> n2 [color=\"red\""));
        assert!(dot.contains("n2 -> n1 [color=\"red\""));
        assert!(!dot.contains("n0 -> n1 [color=\"red\""));

        let plain = DotExporter::new().with_cycle_highlighting(false).export(&graph);
        assert!(!plain.contains("red"));
    }

    #[test]
    fn test_layer_clusters_in_layers_view() {
        let graph = sample(&ViewConfig::default().with_view_mode(ViewMode::Layers));
        let dot = DotExporter::new().export(&graph);
        assert!(dot.contains("subgraph cluster_presentation"));
        assert!(dot.contains("subgraph cluster_data"));
        assert!(dot.contains("label=\"business\";"));

        // Clusters follow hierarchy level, not layer name.
        let presentation = dot.find("cluster_presentation").unwrap();
        let business = dot.find("cluster_business").unwrap();
        let data = dot.find("cluster_data").unwrap();
        assert!(presentation < business && business < data);

        let flat = DotExporter::new().with_layer_clustering(false).export(&graph);
        assert!(!flat.contains("subgraph"));
    }

    #[test]
    fn test_hidden_labels_export_empty_label() {
        let dot = DotExporter::new().export(&sample(&ViewConfig::default().with_labels(false)));
        assert!(dot.contains("n0 [label=\"\""));
    }

    #[test]
    fn test_label_escaping() {
        let escaped = escape_dot_label("test\"quote\\slash\nnewline");
        assert!(escaped.contains("\\\""));
        assert!(escaped.contains("\\\\"));
        assert!(escaped.contains("\\n"));
    }
}
