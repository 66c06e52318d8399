//! Configuration System
//!
//! Layered configuration built with the `config` crate. Lowest to highest
//! precedence: built-in defaults, the global file, the workspace `snipgen.toml`
//! (and `snipgen.{SNIPGEN_ENV}.toml`), then `SNIPGEN__*` environment variables.

use crate::error::ApiError;
use crate::generation::FailurePolicy;
use crate::logging::LoggingConfig;
use crate::source::{FileTemplateSource, SearchScope, TemplateFormat};
use config::Environment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

mod merge;
mod sources;

pub use sources::global_file::global_config_path;
pub use sources::workspace_file::WORKSPACE_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnipgenConfig {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub generation: GenerationSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where templates come from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Default template directory when none is given on the command line
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// Descend into subdirectories
    #[serde(default = "default_true")]
    pub recursive: bool,

    /// File-name suffixes recognised as templates
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_extensions() -> Vec<String> {
    FileTemplateSource::default().extensions
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            directory: None,
            recursive: true,
            extensions: default_extensions(),
        }
    }
}

impl SourceConfig {
    pub fn scope(&self) -> SearchScope {
        SearchScope::from_recursive(self.recursive)
    }

    pub fn template_source(&self) -> FileTemplateSource {
        FileTemplateSource::with_extensions(self.extensions.clone())
    }
}

/// Where generated snippets go
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,

    #[serde(default)]
    pub format: TemplateFormat,
}

fn default_output_directory() -> PathBuf {
    PathBuf::from("generated")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            format: TemplateFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Run the alternative-shortcut pass after generation
    #[serde(default = "default_true")]
    pub alternative_shortcuts: bool,

    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            alternative_shortcuts: true,
            failure_policy: FailurePolicy::default(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Source(String),
    Output(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Source(msg) => write!(f, "Source: {}", msg),
            ValidationError::Output(msg) => write!(f, "Output: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl SnipgenConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.source.extensions.is_empty() {
            errors.push(ValidationError::Source(
                "At least one template extension is required".to_string(),
            ));
        }
        for ext in &self.source.extensions {
            if !ext.starts_with('.') || ext.len() < 2 {
                errors.push(ValidationError::Source(format!(
                    "Extension '{}' must start with '.'",
                    ext
                )));
            }
        }

        if self.output.directory.as_os_str().is_empty() {
            errors.push(ValidationError::Output(
                "Output directory cannot be empty".to_string(),
            ));
        }

        if !matches!(self.logging.format.as_str(), "json" | "text") {
            errors.push(ValidationError::Logging(format!(
                "Invalid format '{}'",
                self.logging.format
            )));
        }
        if !matches!(self.logging.output.as_str(), "stdout" | "stderr" | "file") {
            errors.push(ValidationError::Logging(format!(
                "Invalid output '{}'",
                self.logging.output
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and collapse all errors into one `ApiError`.
    pub fn ensure_valid(&self) -> Result<(), ApiError> {
        self.validate().map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                messages.join("\n")
            ))
        })
    }
}

/// Loads [`SnipgenConfig`] from its layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// `--config` replaces file discovery when given.
    pub fn load_for(workspace_root: &Path, config_path: Option<&Path>) -> Result<SnipgenConfig, ApiError> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => Self::load(workspace_root),
        }
    }

    /// Defaults, global file, workspace files, environment.
    pub fn load(workspace_root: &Path) -> Result<SnipgenConfig, ApiError> {
        let builder = merge::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder);
        let builder = sources::workspace_file::add_to_builder(builder, workspace_root);
        let config = builder.add_source(Self::environment()).build()?;
        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        Ok(config.try_deserialize()?)
    }

    /// Defaults, the given file, environment. Skips file discovery.
    pub fn load_from_file(path: &Path) -> Result<SnipgenConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let config = merge::builder_with_defaults()?
            .add_source(config::File::from(path))
            .add_source(Self::environment())
            .build()?;
        Ok(config.try_deserialize()?)
    }

    fn environment() -> Environment {
        Environment::with_prefix("SNIPGEN")
            .prefix_separator("__")
            .separator("__")
    }
}
