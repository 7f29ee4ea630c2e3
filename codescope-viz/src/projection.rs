//! Graph view projection.
//!
//! Turns an architecture model plus a [`ViewConfig`] snapshot into the node
//! and edge lists handed to the rendering engine. Filtering runs in a fixed
//! order: category, then search, then referential closure over relationships.

use crate::encoding::{edge_width, EncodingConfig};
use crate::palette::{
    edge_color, hierarchy_level, kind_colors, layer_colors, shape_for, NodeShape,
};
use codescope_core::{ComponentNode, Relationship, ViewConfig, ViewMode};
use codescope_utils::contains_lowercased;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Component with its visual encoding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualNode {
    #[serde(flatten)]
    pub component: ComponentNode,
    /// Component name, or empty when labels are hidden
    pub display_label: String,
    pub fill_color: String,
    pub border_color: String,
    pub radius: f64,
    pub shape: NodeShape,
    /// Layout rank, only set in the layers view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hierarchy_level: Option<u8>,
}

impl VisualNode {
    pub fn id(&self) -> &str {
        &self.component.id
    }
}

/// Relationship with its visual encoding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualEdge {
    #[serde(flatten)]
    pub relationship: Relationship,
    pub stroke_color: String,
    pub stroke_width: f64,
}

/// Filtered, styled graph ready for rendering.
///
/// Every edge endpoint is present in `nodes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectedGraph {
    pub nodes: Vec<VisualNode>,
    pub edges: Vec<VisualEdge>,
}

impl ProjectedGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&VisualNode> {
        self.nodes.iter().find(|node| node.id() == id)
    }
}

/// Projects architecture models with a fixed encoding configuration
#[derive(Debug, Clone, Default)]
pub struct Projector {
    encoding: EncodingConfig,
}

impl Projector {
    pub fn new(encoding: EncodingConfig) -> Self {
        Self { encoding }
    }

    pub fn encoding(&self) -> &EncodingConfig {
        &self.encoding
    }

    /// Filter and encode. Output order follows input order.
    pub fn project(
        &self,
        components: &[ComponentNode],
        relationships: &[Relationship],
        config: &ViewConfig,
    ) -> ProjectedGraph {
        let term = config.search_term.to_lowercase();
        let kept: Vec<&ComponentNode> = components
            .iter()
            .filter(|component| config.category_filter.matches_path(&component.file))
            .filter(|component| matches_search(component, &term))
            .collect();

        let kept_ids: HashSet<&str> = kept.iter().map(|component| component.id.as_str()).collect();

        let nodes: Vec<VisualNode> = kept
            .into_iter()
            .map(|component| self.encode_node(component, config))
            .collect();

        let edges: Vec<VisualEdge> = relationships
            .iter()
            .filter(|rel| {
                kept_ids.contains(rel.from.as_str()) && kept_ids.contains(rel.to.as_str())
            })
            .map(encode_edge)
            .collect();

        debug!(
            components = components.len(),
            relationships = relationships.len(),
            nodes = nodes.len(),
            edges = edges.len(),
            category = %config.category_filter,
            view_mode = %config.view_mode,
            "projected graph view"
        );

        ProjectedGraph { nodes, edges }
    }

    fn encode_node(&self, component: &ComponentNode, config: &ViewConfig) -> VisualNode {
        let layered = config.view_mode == ViewMode::Layers;
        let colors = if layered {
            layer_colors(component.layer)
        } else {
            kind_colors(component.kind)
        };

        VisualNode {
            display_label: if config.show_labels {
                component.name.clone()
            } else {
                String::new()
            },
            fill_color: colors.fill.to_string(),
            border_color: colors.border.to_string(),
            radius: self.encoding.radius(component),
            shape: shape_for(component.kind),
            hierarchy_level: if layered {
                hierarchy_level(component.layer)
            } else {
                None
            },
            component: component.clone(),
        }
    }
}

fn encode_edge(relationship: &Relationship) -> VisualEdge {
    VisualEdge {
        stroke_color: edge_color(relationship.kind).to_string(),
        stroke_width: edge_width(relationship.weight),
        relationship: relationship.clone(),
    }
}

/// Search matches name, file path or description. `term` is already lowercase.
fn matches_search(component: &ComponentNode, term: &str) -> bool {
    term.is_empty()
        || contains_lowercased(&component.name, term)
        || contains_lowercased(&component.file, term)
        || component
            .description
            .as_deref()
            .is_some_and(|description| contains_lowercased(description, term))
}

/// Project with the default encoding configuration
pub fn project(
    components: &[ComponentNode],
    relationships: &[Relationship],
    config: &ViewConfig,
) -> ProjectedGraph {
    Projector::default().project(components, relationships, config)
}
