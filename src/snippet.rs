//! Snippet entity: one template or one generated artifact.
//!
//! Keywords are ordered; tag lookups report the keyword index, which callers use
//! to remove the tag in place. `Clone` is a full deep copy, so a clone never shares
//! storage with its original.

mod language;
pub mod tags;

pub use language::Language;
pub use tags::TagInfo;

use crate::error::GenerationError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Snippet {
    pub title: String,

    /// Invocation keyword
    pub shortcut: String,

    pub language: Language,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub keywords: Vec<String>,

    /// Base name used when the snippet is written out
    #[serde(default)]
    pub file_name_suggestion: String,

    #[serde(default)]
    pub code: String,

    /// Origin of the template; absent for generated-only snippets
    #[serde(skip)]
    pub file_path: Option<PathBuf>,
}

impl Snippet {
    pub fn new(title: impl Into<String>, shortcut: impl Into<String>, language: Language) -> Self {
        Self {
            title: title.into(),
            shortcut: shortcut.into(),
            language,
            description: String::new(),
            author: String::new(),
            keywords: Vec::new(),
            file_name_suggestion: String::new(),
            code: String::new(),
            file_path: None,
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name_suggestion = file_name.into();
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Identity used in diagnostics: the source file when known, otherwise title and shortcut.
    pub fn identity(&self) -> String {
        match &self.file_path {
            Some(path) => path.display().to_string(),
            None => format!("'{}' ({})", self.title, self.shortcut),
        }
    }

    /// True when any keyword is a `meta-generate...` directive.
    pub fn has_generate_directive(&self) -> bool {
        self.keywords.iter().any(|k| tags::is_generate_directive(k))
    }

    /// A template can only be generated from when it is markup or carries a directive.
    pub fn check_generation_precondition(&self) -> Result<(), GenerationError> {
        if self.language.is_markup() || self.has_generate_directive() {
            Ok(())
        } else {
            Err(GenerationError::PreconditionViolated {
                identity: self.identity(),
            })
        }
    }

    /// Finds the first keyword carrying tag `name`.
    pub fn try_get_tag(&self, name: &str) -> Option<TagInfo> {
        self.keywords.iter().enumerate().find_map(|(index, keyword)| {
            let (tag, value) = tags::parse_tag(keyword)?;
            tag.eq_ignore_ascii_case(name).then(|| TagInfo {
                keyword_index: index,
                value: value.to_string(),
            })
        })
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.keywords.iter().any(|k| tags::matches_tag(k, name))
    }

    /// Appends tag `name` unless the snippet already has it.
    pub fn add_tag(&mut self, name: &str) {
        if !self.has_tag(name) {
            self.keywords.push(tags::tag_keyword(name));
        }
    }

    pub fn remove_keyword_at(&mut self, index: usize) -> Option<String> {
        (index < self.keywords.len()).then(|| self.keywords.remove(index))
    }

    /// Generation directives as `(name, value)` pairs, in keyword order.
    pub fn generate_directives(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.keywords
            .iter()
            .filter(|k| tags::is_generate_directive(k))
            .filter_map(|k| tags::parse_tag(k))
    }

    pub fn remove_generate_directives(&mut self) {
        self.keywords.retain(|k| !tags::is_generate_directive(k));
    }

    pub fn suffix_title(&mut self, suffix: &str) {
        self.title.push_str(suffix);
    }

    pub fn suffix_file_name(&mut self, suffix: &str) {
        self.file_name_suggestion.push_str(suffix);
    }
}
