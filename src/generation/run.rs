//! Single generate entry point: load, generate, expand alternative shortcuts, write.
//! The CLI uses this only; adapters do no orchestration of their own.

use crate::command::CommandFactory;
use crate::error::{ApiError, GenerationError};
use crate::generation::{expand_alternative_shortcuts, FailurePolicy, GenerationSummary, SnippetGenerator};
use crate::output::SnippetWriter;
use crate::snippet::Snippet;
use crate::source::{SearchScope, TemplateFormat, TemplateSource};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub scope: SearchScope,
    pub format: TemplateFormat,
    pub alternative_shortcuts: bool,
    pub failure_policy: FailurePolicy,
    /// Generate but write nothing
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct GenerateOutcome {
    pub snippets: Vec<Snippet>,
    pub written: Vec<PathBuf>,
    pub summary: GenerationSummary,
}

/// Applies the failure policy to one item error.
fn handle_failure(
    err: GenerationError,
    policy: FailurePolicy,
    summary: &mut GenerationSummary,
) -> Result<(), ApiError> {
    error!("{}", err);
    match policy {
        FailurePolicy::FailImmediately => Err(err.into()),
        FailurePolicy::Continue => {
            summary.record_failure(&err);
            Ok(())
        }
    }
}

pub fn run_generate<F: CommandFactory>(
    generator: &SnippetGenerator<F>,
    source: &dyn TemplateSource,
    request: &GenerateRequest,
) -> Result<GenerateOutcome, ApiError> {
    info!(
        source = %request.source_dir.display(),
        scope = ?request.scope,
        "Generating snippets"
    );
    let mut summary = GenerationSummary::new();
    let mut snippets = Vec::new();

    for item in generator.generate_from_directory(source, &request.source_dir, request.scope)? {
        match item {
            Ok(snippet) => snippets.push(snippet),
            Err(e) => handle_failure(e, request.failure_policy, &mut summary)?,
        }
    }
    summary.generated = snippets.len();

    if request.alternative_shortcuts {
        let mut siblings = Vec::new();
        for item in expand_alternative_shortcuts(&mut snippets) {
            match item {
                Ok(sibling) => siblings.push(sibling),
                Err(e) => handle_failure(e, request.failure_policy, &mut summary)?,
            }
        }
        summary.alternative_shortcuts = siblings.len();
        snippets.extend(siblings);
    }

    let written = if request.dry_run {
        Vec::new()
    } else {
        let mut writer = SnippetWriter::new(&request.output_dir, request.format);
        writer.write_all(&snippets)?
    };
    summary.written = written.len();

    info!(
        generated = summary.generated,
        alternative_shortcuts = summary.alternative_shortcuts,
        written = summary.written,
        failures = summary.failures.len(),
        "Generation finished"
    );

    Ok(GenerateOutcome {
        snippets,
        written,
        summary,
    })
}

/// Result of checking templates without generating.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub checked: usize,
    pub problems: Vec<String>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Loads every template and runs only the generation precondition.
pub fn run_check(
    source: &dyn TemplateSource,
    root: &std::path::Path,
    scope: SearchScope,
) -> Result<CheckReport, ApiError> {
    let mut report = CheckReport::default();
    for template in source.load(root, scope)? {
        report.checked += 1;
        let outcome = template
            .map_err(GenerationError::from)
            .and_then(|snippet| snippet.check_generation_precondition());
        if let Err(e) = outcome {
            report.problems.push(e.to_string());
        }
    }
    Ok(report)
}
