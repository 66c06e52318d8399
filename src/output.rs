//! Writes generated snippets to an output directory.

use crate::error::ApiError;
use crate::snippet::Snippet;
use crate::source::TemplateFormat;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const RESERVED: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Base file name for a snippet: its suggestion, else its shortcut.
pub fn file_stem(snippet: &Snippet) -> String {
    let base = if snippet.file_name_suggestion.trim().is_empty() {
        snippet.shortcut.trim()
    } else {
        snippet.file_name_suggestion.trim()
    };
    let stem: String = base
        .chars()
        .map(|c| if RESERVED.contains(&c) || c.is_control() { '_' } else { c })
        .collect();
    if stem.is_empty() {
        "snippet".to_string()
    } else {
        stem
    }
}

/// Writes snippets as `<stem>.snippet.<ext>`; repeated stems get `-2`, `-3`, ...
pub struct SnippetWriter {
    directory: PathBuf,
    format: TemplateFormat,
    taken: HashSet<String>,
}

impl SnippetWriter {
    pub fn new(directory: impl Into<PathBuf>, format: TemplateFormat) -> Self {
        Self {
            directory: directory.into(),
            format,
            taken: HashSet::new(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Reserves a unique file path for `snippet` without touching the disk.
    pub fn plan(&mut self, snippet: &Snippet) -> PathBuf {
        let stem = file_stem(snippet);
        let mut candidate = stem.clone();
        let mut n = 1;
        while !self.taken.insert(candidate.to_lowercase()) {
            n += 1;
            candidate = format!("{}-{}", stem, n);
        }
        if n > 1 {
            warn!(
                snippet = %snippet.identity(),
                file = %candidate,
                "File name already used in this run"
            );
        }
        self.directory
            .join(format!("{}.snippet.{}", candidate, self.format.extension()))
    }

    pub fn write(&mut self, snippet: &Snippet) -> Result<PathBuf, ApiError> {
        let path = self.plan(snippet);
        std::fs::create_dir_all(&self.directory).map_err(|e| ApiError::Output {
            path: self.directory.clone(),
            message: e.to_string(),
        })?;
        let text = self.format.render(snippet).map_err(|message| ApiError::Output {
            path: path.clone(),
            message,
        })?;
        std::fs::write(&path, text).map_err(|e| ApiError::Output {
            path: path.clone(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), "Snippet written");
        Ok(path)
    }

    pub fn write_all<'a, I>(&mut self, snippets: I) -> Result<Vec<PathBuf>, ApiError>
    where
        I: IntoIterator<Item = &'a Snippet>,
    {
        snippets.into_iter().map(|s| self.write(s)).collect()
    }
}
