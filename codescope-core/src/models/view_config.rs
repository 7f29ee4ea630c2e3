//! User-selected settings for the architecture graph view.

use codescope_utils::file_extension;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Language/category filter for components, keyed on the defining file's
/// extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum CategoryFilter {
    #[default]
    All,
    #[cfg_attr(feature = "clap", value(name = "typescript"))]
    TypeScript,
    #[cfg_attr(feature = "clap", value(name = "javascript"))]
    JavaScript,
    Python,
    Rust,
    Java,
    Go,
    Cpp,
    #[cfg_attr(feature = "clap", value(name = "csharp"))]
    CSharp,
    Ruby,
    Php,
}

impl CategoryFilter {
    pub fn all() -> Vec<Self> {
        vec![
            Self::All,
            Self::TypeScript,
            Self::JavaScript,
            Self::Python,
            Self::Rust,
            Self::Java,
            Self::Go,
            Self::Cpp,
            Self::CSharp,
            Self::Ruby,
            Self::Php,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::TypeScript => "typescript",
            Self::JavaScript => "javascript",
            Self::Python => "python",
            Self::Rust => "rust",
            Self::Java => "java",
            Self::Go => "go",
            Self::Cpp => "cpp",
            Self::CSharp => "csharp",
            Self::Ruby => "ruby",
            Self::Php => "php",
        }
    }

    /// File extensions belonging to this category. Empty for `All`.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::All => &[],
            Self::TypeScript => &["ts", "tsx"],
            Self::JavaScript => &["js", "jsx", "mjs", "cjs"],
            Self::Python => &["py", "pyi", "pyx"],
            Self::Rust => &["rs"],
            Self::Java => &["java"],
            Self::Go => &["go"],
            Self::Cpp => &["c", "cc", "cpp", "cxx", "h", "hpp", "hxx"],
            Self::CSharp => &["cs"],
            Self::Ruby => &["rb"],
            Self::Php => &["php"],
        }
    }

    /// Whether a component defined in `path` passes this filter.
    ///
    /// `All` passes everything; any other filter rejects paths without an
    /// extension in its set.
    pub fn matches_path(self, path: &str) -> bool {
        if self == Self::All {
            return true;
        }
        file_extension(path).is_some_and(|ext| self.extensions().contains(&ext.as_str()))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::all()
            .into_iter()
            .find(|category| category.as_str() == lowered)
            .ok_or_else(|| format!("Unknown category: {s}"))
    }
}

/// How the graph view arranges and colors components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ViewMode {
    #[default]
    Dependencies,
    Components,
    Layers,
    Files,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dependencies => "dependencies",
            Self::Components => "components",
            Self::Layers => "layers",
            Self::Files => "files",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dependencies" => Ok(Self::Dependencies),
            "components" => Ok(Self::Components),
            "layers" => Ok(Self::Layers),
            "files" => Ok(Self::Files),
            _ => Err(format!("Unknown view mode: {s}")),
        }
    }
}

/// Snapshot of the graph view settings.
///
/// The UI owns and mutates its own copy; the projector only ever receives an
/// immutable reference to a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewConfig {
    pub category_filter: CategoryFilter,
    /// Case-insensitive substring matched against name, file and description
    pub search_term: String,
    pub view_mode: ViewMode,
    pub show_labels: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            category_filter: CategoryFilter::All,
            search_term: String::new(),
            view_mode: ViewMode::Dependencies,
            show_labels: true,
        }
    }
}

impl ViewConfig {
    pub fn with_category(mut self, category_filter: CategoryFilter) -> Self {
        self.category_filter = category_filter;
        self
    }

    pub fn with_search(mut self, search_term: impl Into<String>) -> Self {
        self.search_term = search_term.into();
        self
    }

    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }

    pub fn with_labels(mut self, show_labels: bool) -> Self {
        self.show_labels = show_labels;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_matching() {
        assert!(CategoryFilter::TypeScript.matches_path("src/App.tsx"));
        assert!(CategoryFilter::TypeScript.matches_path("x.TS"));
        assert!(!CategoryFilter::TypeScript.matches_path("y.py"));
        assert!(CategoryFilter::Python.matches_path("y.py"));
        assert!(!CategoryFilter::Rust.matches_path("Makefile"));
        assert!(CategoryFilter::All.matches_path("Makefile"));
    }

    #[test]
    fn test_category_string_conversion() {
        for category in CategoryFilter::all() {
            let parsed: CategoryFilter = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert!("cobol".parse::<CategoryFilter>().is_err());

        let json = serde_json::to_string(&CategoryFilter::TypeScript).unwrap();
        assert_eq!(json, "\"typescript\"");
    }

    #[test]
    fn test_view_mode_parsing() {
        assert_eq!("LAYERS".parse::<ViewMode>().unwrap(), ViewMode::Layers);
        assert!("3d".parse::<ViewMode>().is_err());
    }

    #[test]
    fn test_view_config_defaults() {
        let config: ViewConfig = serde_json::from_str(r#"{"searchTerm": "auth"}"#).unwrap();
        assert_eq!(config.category_filter, CategoryFilter::All);
        assert_eq!(config.search_term, "auth");
        assert_eq!(config.view_mode, ViewMode::Dependencies);
        assert!(config.show_labels);
    }
}
