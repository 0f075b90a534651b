use std::io;

use thiserror::Error;

/// Library-wide error type for prefab operations.
///
/// Derivation itself never fails; every variant here belongs to the
/// surrounding machinery (set lookup, rendering, configuration). Errors
/// propagate to the caller unchanged, with no translation and no retry.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Template set directory missing under the sets root.
    #[error("Template set '{name}' not found under {root}")]
    TemplateSetNotFound { name: String, root: String },

    /// Template set identifier is invalid.
    #[error(
        "Invalid template set '{0}': must be alphanumeric with hyphens, underscores, or periods"
    )]
    InvalidTemplateSetId(String),

    /// A template path or body failed to render.
    #[error("Failed to render '{path}': {reason}")]
    TemplateRender { path: String, reason: String },

    /// A rendered path would land outside the output root.
    #[error("Rendered path escapes the output directory: {0}")]
    PathEscapesOutput(String),

    /// A template entry name is not valid unicode and cannot be rendered.
    #[error("Template path is not valid unicode: {0}")]
    NonUnicodePath(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}
