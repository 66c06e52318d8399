//! Generation commands and the per-command execution context.
//!
//! A command runs against its own [`ExecutionContext`], which wraps an independent
//! copy of the template. It may push any number of derived snippets or cancel,
//! in which case everything it pushed is dropped by the generator.

pub mod builtin;

pub use builtin::DirectiveCommandFactory;

use crate::snippet::{tags, Snippet};
use std::fmt;

/// Scratch workspace for one command execution.
#[derive(Debug)]
pub struct ExecutionContext {
    snippet: Snippet,
    outputs: Vec<Snippet>,
    cancelled: bool,
}

impl ExecutionContext {
    /// Takes ownership of an already-copied snippet.
    pub fn new(snippet: Snippet) -> Self {
        Self {
            snippet,
            outputs: Vec::new(),
            cancelled: false,
        }
    }

    pub fn snippet(&self) -> &Snippet {
        &self.snippet
    }

    pub fn snippet_mut(&mut self) -> &mut Snippet {
        &mut self.snippet
    }

    pub fn push(&mut self, snippet: Snippet) {
        self.outputs.push(snippet);
    }

    /// Marks this generation path as not applicable to the template.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn outputs(&self) -> &[Snippet] {
        &self.outputs
    }

    pub fn into_outputs(self) -> Vec<Snippet> {
        self.outputs
    }
}

/// A generation strategy.
pub trait Command: fmt::Debug {
    /// Short name used in logs.
    fn name(&self) -> &str;

    fn execute(&self, context: &mut ExecutionContext);
}

/// Derives the commands that apply to a template, plus the generator hooks
/// around each execution.
pub trait CommandFactory {
    /// Ordered list of commands for `snippet`.
    fn create_commands(&self, snippet: &Snippet) -> Vec<Box<dyn Command>>;

    fn create_execution_context(&self, snippet: &Snippet) -> ExecutionContext {
        ExecutionContext::new(snippet.clone())
    }

    /// Applied to every emitted snippet. Only adds the auto-generated tag.
    fn post_process(&self, mut snippet: Snippet) -> Snippet {
        snippet.add_tag(tags::AUTO_GENERATED);
        snippet
    }
}

impl<F: CommandFactory + ?Sized> CommandFactory for &F {
    fn create_commands(&self, snippet: &Snippet) -> Vec<Box<dyn Command>> {
        (**self).create_commands(snippet)
    }

    fn create_execution_context(&self, snippet: &Snippet) -> ExecutionContext {
        (**self).create_execution_context(snippet)
    }

    fn post_process(&self, snippet: Snippet) -> Snippet {
        (**self).post_process(snippet)
    }
}
