//! Fixed visual lookup tables.
//!
//! Each table is an exhaustive match. The `Unknown` arm of every input enum
//! is the designated default entry.

use codescope_core::{ComponentKind, Layer, RelationshipKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fill and border color of a node, as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub fill: &'static str,
    pub border: &'static str,
}

impl ColorPair {
    const fn new(fill: &'static str, border: &'static str) -> Self {
        Self { fill, border }
    }
}

/// Used for unknown kinds and layers
pub const DEFAULT_COLORS: ColorPair = ColorPair::new("#94a3b8", "#475569");

/// Used for unknown relationship kinds
pub const DEFAULT_EDGE_COLOR: &str = "#94a3b8";

/// Node colors keyed by component kind
pub const fn kind_colors(kind: ComponentKind) -> ColorPair {
    match kind {
        ComponentKind::Class => ColorPair::new("#3b82f6", "#1d4ed8"),
        ComponentKind::Function => ColorPair::new("#10b981", "#047857"),
        ComponentKind::Module => ColorPair::new("#8b5cf6", "#6d28d9"),
        ComponentKind::Service => ColorPair::new("#f59e0b", "#b45309"),
        ComponentKind::Component => ColorPair::new("#ef4444", "#b91c1c"),
        ComponentKind::Config => ColorPair::new("#6b7280", "#374151"),
        ComponentKind::Unknown => DEFAULT_COLORS,
    }
}

/// Node colors keyed by architectural layer
pub const fn layer_colors(layer: Layer) -> ColorPair {
    match layer {
        Layer::Presentation => ColorPair::new("#ec4899", "#be185d"),
        Layer::Business => ColorPair::new("#3b82f6", "#1d4ed8"),
        Layer::Data => ColorPair::new("#10b981", "#047857"),
        Layer::Infrastructure => ColorPair::new("#f59e0b", "#b45309"),
        Layer::External => ColorPair::new("#6b7280", "#374151"),
        Layer::Unknown => DEFAULT_COLORS,
    }
}

/// Edge stroke color keyed by relationship kind
pub const fn edge_color(kind: RelationshipKind) -> &'static str {
    match kind {
        RelationshipKind::Imports => "#3b82f6",
        RelationshipKind::Calls => "#10b981",
        RelationshipKind::Extends => "#8b5cf6",
        RelationshipKind::Implements => "#f59e0b",
        RelationshipKind::Uses => "#6b7280",
        RelationshipKind::Configures => "#ef4444",
        RelationshipKind::Unknown => DEFAULT_EDGE_COLOR,
    }
}

/// Marker shape of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeShape {
    Box,
    Ellipse,
    Diamond,
    Star,
    Triangle,
    Square,
    /// Default marker
    Dot,
}

impl NodeShape {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Ellipse => "ellipse",
            Self::Diamond => "diamond",
            Self::Star => "star",
            Self::Triangle => "triangle",
            Self::Square => "square",
            Self::Dot => "dot",
        }
    }
}

impl fmt::Display for NodeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const fn shape_for(kind: ComponentKind) -> NodeShape {
    match kind {
        ComponentKind::Class => NodeShape::Box,
        ComponentKind::Function => NodeShape::Ellipse,
        ComponentKind::Module => NodeShape::Diamond,
        ComponentKind::Service => NodeShape::Star,
        ComponentKind::Component => NodeShape::Triangle,
        ComponentKind::Config => NodeShape::Square,
        ComponentKind::Unknown => NodeShape::Dot,
    }
}

/// Rank of a layer in the layered arrangement, top (1) to bottom (5)
pub const fn hierarchy_level(layer: Layer) -> Option<u8> {
    match layer {
        Layer::Presentation => Some(1),
        Layer::Business => Some(2),
        Layer::Data => Some(3),
        Layer::Infrastructure => Some(4),
        Layer::External => Some(5),
        Layer::Unknown => None,
    }
}
