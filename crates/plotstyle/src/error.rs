//! Error types for style configuration and color lookup.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StyleError>;

/// Error returned by palette lookup, parsing and export.
#[derive(Debug, Error)]
pub enum StyleError {
    /// The name is neither a palette entry nor one of its aliases.
    #[error("color '{name}' is not in the palette")]
    NotFound { name: String },

    /// The palette position exists but the active cycle is too short to cover it.
    #[error("color '{name}' maps to cycle index {index}, but the active cycle has {len} colors")]
    CycleExhausted {
        name: String,
        index: usize,
        len: usize,
    },

    /// A name or alias was registered twice in one palette.
    #[error("palette already contains '{name}'")]
    DuplicateName { name: String },

    /// A string could not be parsed as a color.
    #[error("invalid color '{value}': {reason}")]
    InvalidColor { value: String, reason: String },

    /// A loaded option is out of range.
    #[error("invalid option {field} = {value}: expected a finite number greater than 0")]
    InvalidOption { field: &'static str, value: f64 },

    #[error("unknown style sheet '{name}'")]
    UnknownStyleSheet { name: String },

    #[error("unknown preset '{name}'")]
    UnknownPreset { name: String },

    #[error("invalid YAML style options: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render rc file: {0}")]
    Template(#[from] minijinja::Error),
}
