//! CLI route: single route table and run context. Dispatches to generation services and presentation.

use crate::cli::parse::{Commands, OutputFormatArg};
use crate::cli::presentation::{format_check_report, format_generate_outcome};
use crate::command::DirectiveCommandFactory;
use crate::config::{ConfigLoader, SnipgenConfig};
use crate::error::ApiError;
use crate::generation::{run_check, run_generate, FailurePolicy, GenerateRequest, SnippetGenerator};
use crate::source::{SearchScope, TemplateFormat};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Runtime context for CLI execution: workspace root and loaded configuration.
pub struct RunContext {
    workspace_root: PathBuf,
    config: SnipgenConfig,
    generator: SnippetGenerator<DirectiveCommandFactory>,
}

impl RunContext {
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = ConfigLoader::load_for(&workspace_root, config_path.as_deref())?;
        Self::with_config(workspace_root, config)
    }

    pub fn with_config(workspace_root: PathBuf, config: SnipgenConfig) -> Result<Self, ApiError> {
        config.ensure_valid()?;
        Ok(Self {
            workspace_root,
            config,
            generator: SnippetGenerator::new(DirectiveCommandFactory::new()),
        })
    }

    pub fn config(&self) -> &SnipgenConfig {
        &self.config
    }

    /// Relative paths are taken from the workspace root.
    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.workspace_root.join(path)
        }
    }

    fn source_dir(&self, source: Option<&PathBuf>) -> Result<PathBuf, ApiError> {
        source
            .or(self.config.source.directory.as_ref())
            .map(|p| self.resolve(p))
            .ok_or_else(|| {
                ApiError::ConfigError(
                    "No template directory. Pass `--source <dir>` or set source.directory".to_string(),
                )
            })
    }

    fn scope(&self, top_level_only: bool) -> SearchScope {
        if top_level_only {
            SearchScope::TopDirectoryOnly
        } else {
            self.config.source.scope()
        }
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        debug!(?command, "Executing command");
        match command {
            Commands::Generate {
                source,
                output,
                top_level_only,
                no_alternative_shortcuts,
                format,
                keep_going,
                dry_run,
            } => {
                let request = GenerateRequest {
                    source_dir: self.source_dir(source.as_ref())?,
                    output_dir: self.resolve(output.as_ref().unwrap_or(&self.config.output.directory)),
                    scope: self.scope(*top_level_only),
                    format: match format {
                        Some(OutputFormatArg::Toml) => TemplateFormat::Toml,
                        Some(OutputFormatArg::Json) => TemplateFormat::Json,
                        None => self.config.output.format,
                    },
                    alternative_shortcuts: self.config.generation.alternative_shortcuts
                        && !no_alternative_shortcuts,
                    failure_policy: if *keep_going {
                        FailurePolicy::Continue
                    } else {
                        self.config.generation.failure_policy
                    },
                    dry_run: *dry_run,
                };
                let template_source = self
                    .config
                    .source
                    .template_source()
                    .excluding(request.output_dir.clone());
                let outcome = run_generate(&self.generator, &template_source, &request)?;
                let text = format_generate_outcome(&outcome, request.dry_run);
                if outcome.summary.is_success() {
                    Ok(text)
                } else {
                    Err(ApiError::Failed(text))
                }
            }
            Commands::Check {
                source,
                top_level_only,
            } => {
                let root = self.source_dir(source.as_ref())?;
                let template_source = self
                    .config
                    .source
                    .template_source()
                    .excluding(self.resolve(&self.config.output.directory));
                let report = run_check(&template_source, &root, self.scope(*top_level_only))?;
                let text = format_check_report(&report);
                if report.is_clean() {
                    Ok(text)
                } else {
                    Err(ApiError::Failed(text))
                }
            }
        }
    }
}
