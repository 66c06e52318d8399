//! Per-template generation pipeline.
//!
//! Every command starts from a fresh copy of the pristine template. A cancelled
//! command contributes nothing; outputs of the others are post-processed and
//! yielded in command order, then in the order each command pushed them.

use crate::command::{Command, CommandFactory};
use crate::error::{GenerationError, SourceError};
use crate::snippet::Snippet;
use crate::source::{SearchScope, TemplateSource};
use std::iter::FusedIterator;
use std::path::Path;
use tracing::debug;

/// Runs the commands derived by `F` over templates.
#[derive(Debug, Clone, Default)]
pub struct SnippetGenerator<F> {
    factory: F,
}

impl<F: CommandFactory> SnippetGenerator<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Generates snippets from one template.
    ///
    /// Fails up front when the template violates the generation precondition.
    /// The returned iterator is lazy: commands run as outputs are pulled.
    pub fn generate<'a>(
        &'a self,
        snippet: &'a Snippet,
    ) -> Result<GeneratedSnippets<'a, F>, GenerationError> {
        snippet.check_generation_precondition()?;

        let commands = self.factory.create_commands(snippet);
        debug!(
            template = %snippet.identity(),
            commands = commands.len(),
            "Generating snippets"
        );

        Ok(GeneratedSnippets {
            factory: &self.factory,
            template: snippet,
            commands: commands.into_iter(),
            pending: Vec::new().into_iter(),
        })
    }

    /// Loads every template under `root` and generates from each in turn.
    ///
    /// A template that fails to load or violates the precondition yields one
    /// `Err` item; the remaining templates are still processed.
    pub fn generate_from_directory<'a>(
        &'a self,
        source: &dyn TemplateSource,
        root: &Path,
        scope: SearchScope,
    ) -> Result<impl Iterator<Item = Result<Snippet, GenerationError>> + 'a, GenerationError> {
        let templates = source.load(root, scope)?;
        Ok(templates.flat_map(move |template| self.generate_owned(template)))
    }

    fn generate_owned(
        &self,
        template: Result<Snippet, SourceError>,
    ) -> Vec<Result<Snippet, GenerationError>> {
        let template = match template {
            Ok(template) => template,
            Err(e) => return vec![Err(e.into())],
        };
        match self.generate(&template) {
            Ok(generated) => generated.map(Ok).collect(),
            Err(e) => vec![Err(e)],
        }
    }
}

/// Lazy output of [`SnippetGenerator::generate`].
pub struct GeneratedSnippets<'a, F> {
    factory: &'a F,
    template: &'a Snippet,
    commands: std::vec::IntoIter<Box<dyn Command>>,
    pending: std::vec::IntoIter<Snippet>,
}

impl<F: CommandFactory> Iterator for GeneratedSnippets<'_, F> {
    type Item = Snippet;

    fn next(&mut self) -> Option<Snippet> {
        loop {
            if let Some(snippet) = self.pending.next() {
                return Some(self.factory.post_process(snippet));
            }

            let command = self.commands.next()?;
            let mut context = self.factory.create_execution_context(self.template);
            command.execute(&mut context);

            if context.is_cancelled() {
                debug!(
                    template = %self.template.identity(),
                    command = command.name(),
                    "Command cancelled"
                );
                continue;
            }

            let outputs = context.into_outputs();
            debug!(
                template = %self.template.identity(),
                command = command.name(),
                outputs = outputs.len(),
                "Command executed"
            );
            self.pending = outputs.into_iter();
        }
    }
}

impl<F: CommandFactory> FusedIterator for GeneratedSnippets<'_, F> {}
