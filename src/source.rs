//! Template sources.
//!
//! The generator only sees [`Snippet`]s; how templates are stored is up to the
//! [`TemplateSource`] implementation.

mod file;

pub use file::{FileTemplateSource, TemplateFormat};

use crate::error::SourceError;
use crate::snippet::Snippet;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Lazily loaded templates. Each item fails independently.
pub type Templates = Box<dyn Iterator<Item = Result<Snippet, SourceError>>>;

/// How far below the root a source looks for templates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    TopDirectoryOnly,
    #[default]
    AllDirectories,
}

impl SearchScope {
    pub fn from_recursive(recursive: bool) -> Self {
        if recursive {
            SearchScope::AllDirectories
        } else {
            SearchScope::TopDirectoryOnly
        }
    }
}

pub trait TemplateSource {
    /// Starts loading templates under `root`. Fails only when `root` itself is unusable.
    fn load(&self, root: &Path, scope: SearchScope) -> Result<Templates, SourceError>;
}
