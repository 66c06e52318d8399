//! Merge rules: defaults, override order, conflict handling.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("source.recursive", true)?
        .set_default(
            "source.extensions",
            vec![".snippet.toml".to_string(), ".snippet.json".to_string()],
        )?
        .set_default("output.directory", "generated")?
        .set_default("output.format", "toml")?
        .set_default("generation.alternative_shortcuts", true)?
        .set_default("generation.failure_policy", "fail_immediately")
}
