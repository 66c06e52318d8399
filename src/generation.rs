//! Snippet generation: the per-template command pipeline and the
//! alternative-shortcut pass that runs over a materialized batch.

pub mod alternative;
pub mod generator;
pub mod run;
pub mod summary;

pub use alternative::{expand_alternative_shortcuts, AlternativeShortcuts};
pub use generator::{GeneratedSnippets, SnippetGenerator};
pub use run::{run_check, run_generate, CheckReport, GenerateOutcome, GenerateRequest};
pub use summary::{FailurePolicy, GenerationFailure, GenerationSummary};
