//! Error types for snippet generation.

use std::path::PathBuf;
use thiserror::Error;

/// Template loading errors
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Template I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to walk {path:?}: {message}")]
    Walk { path: PathBuf, message: String },

    #[error("Failed to parse template {path:?}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Template root not found: {0:?}")]
    RootNotFound(PathBuf),
}

/// Errors raised while generating snippets from a template.
///
/// Both variants describe authoring mistakes in templates; they carry the
/// template identity so the author can locate it. None of them is retried.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(
        "Template {identity} has no generate directive and is not markup; \
         add a `meta-generate...` keyword"
    )]
    PreconditionViolated { identity: String },

    #[error("Malformed `{tag}` tag on {identity}: {message}")]
    MalformedTag {
        identity: String,
        tag: String,
        message: String,
    },

    #[error("Template source error: {0}")]
    Source(#[from] SourceError),
}

/// Host-level errors surfaced by the CLI
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Generation(#[from] GenerationError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to write {path:?}: {message}")]
    Output { path: PathBuf, message: String },

    #[error("{0}")]
    Failed(String),
}

impl From<SourceError> for ApiError {
    fn from(err: SourceError) -> Self {
        ApiError::Generation(GenerationError::Source(err))
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
