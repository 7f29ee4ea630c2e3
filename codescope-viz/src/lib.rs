//! CodeScope Visualization - Graph View Projection
//!
//! Derives the node/edge lists shown in the architecture graph view from an
//! externally built architecture model and the current view settings:
//! category and search filtering, referential closure over relationships,
//! and the visual encoding (colors, radius, marker shape, layer rank,
//! labels, edge strokes). Layout and drawing belong to the rendering engine.
//!
//! Projection is a pure function of its inputs, so callers re-run it on every
//! settings change.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

pub mod encoding;
pub mod graph_analysis;
pub mod graph_dot;
pub mod palette;
pub mod projection;

pub use encoding::{edge_width, EncodingConfig};
pub use graph_analysis::{GraphSummary, ViewGraph};
pub use graph_dot::DotExporter;
pub use palette::{ColorPair, NodeShape};
pub use projection::{project, ProjectedGraph, Projector, VisualEdge, VisualNode};
