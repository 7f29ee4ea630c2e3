//! CodeScope Utilities
//!
//! Small shared building blocks used by every CodeScope crate: the common
//! error type, logging bootstrap, configuration file loading and helpers for
//! slash-delimited repository paths.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod logging;
pub mod path;
pub mod string;

/// Re-export commonly used utilities
pub use config::load_config;
pub use logging::{init_logging, LogLevel, LoggerConfig};
pub use path::{file_extension, file_name, parent_path, path_depth};
pub use string::contains_lowercased;

/// Result type used throughout CodeScope utilities
pub type Result<T> = std::result::Result<T, UtilError>;

/// Error types for utility operations
#[derive(Debug, thiserror::Error)]
pub enum UtilError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}
