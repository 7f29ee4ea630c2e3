//! Architecture model: components of an analyzed codebase and the typed
//! relationships between them.
//!
//! The model is produced by an external analyzer and only consumed here.
//! Every enumeration carries an `Unknown` variant so that values this crate
//! does not recognize still deserialize; the visual encoding maps `Unknown`
//! to its default styling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Kind of architectural unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Class,
    Function,
    Module,
    Service,
    Component,
    Config,
    #[serde(other)]
    Unknown,
}

impl ComponentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Function => "function",
            Self::Module => "module",
            Self::Service => "service",
            Self::Component => "component",
            Self::Config => "config",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Architectural layer a component belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Presentation,
    Business,
    Data,
    Infrastructure,
    External,
    #[serde(other)]
    Unknown,
}

impl Layer {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Presentation => "presentation",
            Self::Business => "business",
            Self::Data => "data",
            Self::Infrastructure => "infrastructure",
            Self::External => "external",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a directed relationship between two components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipKind {
    Imports,
    Calls,
    Extends,
    Implements,
    Uses,
    Configures,
    #[serde(other)]
    Unknown,
}

impl RelationshipKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Imports => "imports",
            Self::Calls => "calls",
            Self::Extends => "extends",
            Self::Implements => "implements",
            Self::Uses => "uses",
            Self::Configures => "configures",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One architectural unit of the analyzed codebase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentNode {
    pub id: String,
    pub name: String,
    #[serde(alias = "type")]
    pub kind: ComponentKind,
    pub layer: Layer,
    /// Repository path of the defining file
    pub file: String,
    #[serde(default)]
    pub line_count: u64,
    #[serde(default)]
    pub complexity_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub exports: Vec<String>,
}

impl ComponentNode {
    /// Create a component with no metrics, description, dependencies or exports
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: ComponentKind,
        layer: Layer,
        file: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            layer,
            file: file.into(),
            line_count: 0,
            complexity_score: 0.0,
            description: None,
            dependencies: Vec::new(),
            exports: Vec::new(),
        }
    }

    pub fn with_metrics(mut self, line_count: u64, complexity_score: f64) -> Self {
        self.line_count = line_count;
        self.complexity_score = complexity_score;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

fn default_weight() -> f64 {
    1.0
}

/// Directed, typed edge between two components.
///
/// `from` and `to` are expected to reference ids of the accompanying
/// component set; the supplier guarantees this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// Derived from the `(from, to)` pair when absent on input
    #[serde(default)]
    pub id: String,
    pub from: String,
    pub to: String,
    #[serde(alias = "type")]
    pub kind: RelationshipKind,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Relationship {
    /// Create a relationship with an id derived from its endpoints
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        kind: RelationshipKind,
        weight: f64,
    ) -> Self {
        let from = from.into();
        let to = to.into();
        Self {
            id: Self::derive_id(&from, &to),
            from,
            to,
            kind,
            weight,
            description: None,
        }
    }

    /// Identifier for the `(from, to)` pair
    pub fn derive_id(from: &str, to: &str) -> String {
        format!("{from}->{to}")
    }
}

/// Components plus relationships, as produced by the external analyzer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArchitectureModel {
    #[serde(default, alias = "nodes")]
    pub components: Vec<ComponentNode>,
    #[serde(default, alias = "edges")]
    pub relationships: Vec<Relationship>,
}

impl ArchitectureModel {
    /// Parse a model from JSON, filling in missing relationship ids
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let mut model: Self = serde_json::from_str(json)?;
        for relationship in &mut model.relationships {
            if relationship.id.is_empty() {
                relationship.id = Relationship::derive_id(&relationship.from, &relationship.to);
            }
        }
        tracing::debug!(
            components = model.components.len(),
            relationships = model.relationships.len(),
            "parsed architecture model"
        );
        Ok(model)
    }

    /// Read and parse a JSON model file
    pub fn from_json_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
