//! Size and stroke encoding.

use codescope_core::ComponentNode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Constants of the node radius formula.
///
/// `radius = base + min(2, complexity / 5) * complexity_weight
///                + min(1.5, lines / 100) * line_weight`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodingConfig {
    pub base_radius: f64,
    pub complexity_weight: f64,
    pub line_weight: f64,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            base_radius: 20.0,
            complexity_weight: 5.0,
            line_weight: 5.0,
        }
    }
}

impl EncodingConfig {
    /// Load from a TOML, JSON or YAML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let config = codescope_utils::load_config(path)?;
        Ok(config)
    }

    pub fn radius(&self, component: &ComponentNode) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let lines = component.line_count as f64;
        let complexity_term = (component.complexity_score / 5.0).min(2.0);
        let size_term = (lines / 100.0).min(1.5);
        self.base_radius + complexity_term * self.complexity_weight + size_term * self.line_weight
    }
}

/// Edge stroke width: twice the weight, clamped to `[1, 5]`
pub fn edge_width(weight: f64) -> f64 {
    (weight * 2.0).clamp(1.0, 5.0)
}
