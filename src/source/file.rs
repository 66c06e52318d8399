//! Filesystem template source: one snippet per `*.snippet.toml` / `*.snippet.json` file.

use crate::error::SourceError;
use crate::snippet::Snippet;
use crate::source::{SearchScope, TemplateSource, Templates};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::WalkDir;

/// Serialization of a template or output file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemplateFormat {
    #[default]
    Toml,
    Json,
}

impl TemplateFormat {
    pub fn extension(self) -> &'static str {
        match self {
            TemplateFormat::Toml => "toml",
            TemplateFormat::Json => "json",
        }
    }

    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "toml" => Some(TemplateFormat::Toml),
            "json" => Some(TemplateFormat::Json),
            _ => None,
        }
    }

    pub fn parse(self, text: &str) -> Result<Snippet, String> {
        match self {
            TemplateFormat::Toml => toml::from_str(text).map_err(|e| e.to_string()),
            TemplateFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        }
    }

    pub fn render(self, snippet: &Snippet) -> Result<String, String> {
        match self {
            TemplateFormat::Toml => toml::to_string_pretty(snippet).map_err(|e| e.to_string()),
            TemplateFormat::Json => serde_json::to_string_pretty(snippet).map_err(|e| e.to_string()),
        }
    }
}

/// Walks a directory for template files, in file-name order.
#[derive(Debug, Clone)]
pub struct FileTemplateSource {
    /// File-name suffixes that mark a template (e.g. `.snippet.toml`)
    pub extensions: Vec<String>,
    /// Whether to follow symbolic links (default: false)
    pub follow_symlinks: bool,
    /// Directories never descended into (e.g. the output directory)
    pub excluded: Vec<PathBuf>,
}

impl Default for FileTemplateSource {
    fn default() -> Self {
        Self {
            extensions: vec![".snippet.toml".to_string(), ".snippet.json".to_string()],
            follow_symlinks: false,
            excluded: Vec::new(),
        }
    }
}

impl FileTemplateSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extensions(extensions: Vec<String>) -> Self {
        Self {
            extensions,
            ..Self::default()
        }
    }

    /// Skips `directory` and everything below it.
    pub fn excluding(mut self, directory: impl Into<PathBuf>) -> Self {
        self.excluded.push(directory.into());
        self
    }

    fn is_excluded(&self, directory: &Path) -> bool {
        self.excluded.iter().any(|excluded| {
            excluded == directory
                || matches!(
                    (excluded.canonicalize(), directory.canonicalize()),
                    (Ok(a), Ok(b)) if a == b
                )
        })
    }

    /// Returns the matched suffix when `path` names a template file.
    fn template_suffix(&self, path: &Path) -> Option<String> {
        let name = path.file_name()?.to_str()?.to_ascii_lowercase();
        self.extensions
            .iter()
            .find(|ext| name.ends_with(&ext.to_ascii_lowercase()))
            .cloned()
    }
}

impl TemplateSource for FileTemplateSource {
    fn load(&self, root: &Path, scope: SearchScope) -> Result<Templates, SourceError> {
        if !root.is_dir() {
            return Err(SourceError::RootNotFound(root.to_path_buf()));
        }

        let max_depth = match scope {
            SearchScope::TopDirectoryOnly => 1,
            SearchScope::AllDirectories => usize::MAX,
        };
        let walker = WalkDir::new(root)
            .follow_links(self.follow_symlinks)
            .max_depth(max_depth)
            .sort_by_file_name();

        let source = self.clone();
        let filter = self.clone();
        let walker = walker.into_iter().filter_entry(move |entry| {
            let skip = entry.depth() > 0 && entry.file_type().is_dir() && filter.is_excluded(entry.path());
            if skip {
                trace!(path = %entry.path().display(), "Skipping excluded directory");
            }
            !skip
        });
        let templates = walker.filter_map(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                    return Some(Err(SourceError::Walk {
                        path,
                        message: e.to_string(),
                    }));
                }
            };
            if !entry.file_type().is_file() {
                return None;
            }
            let suffix = source.template_suffix(entry.path())?;
            Some(read_template(entry.into_path(), &suffix))
        });

        Ok(Box::new(templates))
    }
}

fn read_template(path: PathBuf, suffix: &str) -> Result<Snippet, SourceError> {
    trace!(path = %path.display(), "Reading template");

    let format = TemplateFormat::from_path(&path).ok_or_else(|| SourceError::Parse {
        path: path.clone(),
        message: "unsupported template extension".to_string(),
    })?;
    let text = std::fs::read_to_string(&path)?;
    let mut snippet = format.parse(&text).map_err(|message| SourceError::Parse {
        path: path.clone(),
        message,
    })?;

    if snippet.file_name_suggestion.is_empty() {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        let stem_len = name.len().saturating_sub(suffix.len());
        snippet.file_name_suggestion = name.get(..stem_len).unwrap_or(name).to_string();
    }
    snippet.file_path = Some(path);
    Ok(snippet)
}
