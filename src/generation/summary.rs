use crate::error::GenerationError;
use serde::{Deserialize, Serialize};

/// What a generation run does when one template fails.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop at the first failing template.
    #[default]
    FailImmediately,
    /// Record the failure and keep going; the run still fails at the end.
    Continue,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationFailure {
    pub message: String,
}

impl From<&GenerationError> for GenerationFailure {
    fn from(err: &GenerationError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Counters for one generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub generated: usize,
    pub alternative_shortcuts: usize,
    pub written: usize,
    pub failures: Vec<GenerationFailure>,
}

impl GenerationSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_failure(&mut self, err: &GenerationError) {
        self.failures.push(err.into());
    }

    pub fn total(&self) -> usize {
        self.generated + self.alternative_shortcuts
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}
