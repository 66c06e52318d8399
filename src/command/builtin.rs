//! Built-in command family driven by `meta-generate-*` directive keywords.
//!
//! | directive                              | command                    |
//! |----------------------------------------|----------------------------|
//! | `meta-generate-copy`                   | [`CopyCommand`]            |
//! | `meta-generate-language:<language>`    | [`RetargetLanguageCommand`]|
//! | `meta-generate-shortcut-prefix:<text>` | [`ShortcutPrefixCommand`]  |
//! | `meta-generate-title-suffix:<text>`    | [`TitleSuffixCommand`]     |
//!
//! Emitted snippets have their directive keywords stripped.

use crate::command::{Command, CommandFactory, ExecutionContext};
use crate::snippet::{Language, Snippet};
use tracing::warn;

pub const COPY_DIRECTIVE: &str = "generate-copy";
pub const LANGUAGE_DIRECTIVE: &str = "generate-language";
pub const SHORTCUT_PREFIX_DIRECTIVE: &str = "generate-shortcut-prefix";
pub const TITLE_SUFFIX_DIRECTIVE: &str = "generate-title-suffix";

/// Working copy with directive keywords removed.
fn derived(context: &ExecutionContext) -> Snippet {
    let mut snippet = context.snippet().clone();
    snippet.remove_generate_directives();
    snippet
}

#[derive(Debug, Clone, Default)]
pub struct CopyCommand;

impl Command for CopyCommand {
    fn name(&self) -> &str {
        "copy"
    }

    fn execute(&self, context: &mut ExecutionContext) {
        let snippet = derived(context);
        context.push(snippet);
    }
}

#[derive(Debug, Clone)]
pub struct RetargetLanguageCommand {
    pub language: Language,
}

impl Command for RetargetLanguageCommand {
    fn name(&self) -> &str {
        "retarget-language"
    }

    fn execute(&self, context: &mut ExecutionContext) {
        if context.snippet().language == self.language {
            context.cancel();
            return;
        }
        let mut snippet = derived(context);
        snippet.language = self.language;
        context.push(snippet);
    }
}

#[derive(Debug, Clone)]
pub struct ShortcutPrefixCommand {
    pub prefix: String,
}

impl Command for ShortcutPrefixCommand {
    fn name(&self) -> &str {
        "shortcut-prefix"
    }

    fn execute(&self, context: &mut ExecutionContext) {
        if self.prefix.is_empty() || context.snippet().shortcut.starts_with(&self.prefix) {
            context.cancel();
            return;
        }
        let mut snippet = derived(context);
        snippet.shortcut = format!("{}{}", self.prefix, snippet.shortcut);
        context.push(snippet);
    }
}

#[derive(Debug, Clone)]
pub struct TitleSuffixCommand {
    pub suffix: String,
}

impl Command for TitleSuffixCommand {
    fn name(&self) -> &str {
        "title-suffix"
    }

    fn execute(&self, context: &mut ExecutionContext) {
        if self.suffix.trim().is_empty() {
            context.cancel();
            return;
        }
        let mut snippet = derived(context);
        snippet.suffix_title(&format!(" {}", self.suffix));
        context.push(snippet);
    }
}

/// Maps each directive keyword of a template to one command, in keyword order.
#[derive(Debug, Clone, Default)]
pub struct DirectiveCommandFactory;

impl DirectiveCommandFactory {
    pub fn new() -> Self {
        Self
    }

    fn command_for(&self, snippet: &Snippet, name: &str, value: &str) -> Option<Box<dyn Command>> {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            COPY_DIRECTIVE => Some(Box::new(CopyCommand)),
            LANGUAGE_DIRECTIVE => match value.parse::<Language>() {
                Ok(language) => Some(Box::new(RetargetLanguageCommand { language })),
                Err(e) => {
                    warn!(template = %snippet.identity(), directive = %name, "{}", e);
                    None
                }
            },
            SHORTCUT_PREFIX_DIRECTIVE => Some(Box::new(ShortcutPrefixCommand {
                prefix: value.to_string(),
            })),
            TITLE_SUFFIX_DIRECTIVE => Some(Box::new(TitleSuffixCommand {
                suffix: value.to_string(),
            })),
            _ => {
                warn!(template = %snippet.identity(), directive = %name, "Unknown generate directive");
                None
            }
        }
    }
}

impl CommandFactory for DirectiveCommandFactory {
    fn create_commands(&self, snippet: &Snippet) -> Vec<Box<dyn Command>> {
        let mut commands: Vec<Box<dyn Command>> = snippet
            .generate_directives()
            .filter_map(|(name, value)| self.command_for(snippet, name, value))
            .collect();

        if commands.is_empty() && snippet.language.is_markup() && !snippet.has_generate_directive() {
            commands.push(Box::new(CopyCommand));
        }

        commands
    }
}
