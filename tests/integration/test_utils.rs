//! Shared helpers for integration tests: template fixtures and scripted commands.

use snipgen::command::{Command, CommandFactory, ExecutionContext};
use snipgen::snippet::{Language, Snippet};
use std::fs;
use std::path::Path;

pub const IF_TEMPLATE: &str = r#"
title = "If"
shortcut = "if"
language = "c-sharp"
file_name_suggestion = "If"
keywords = ["statement", "meta-generate-copy", "meta-generate-language:visual-basic", "meta-alternative-shortcut:iff"]
code = "if ($condition$) { $end$ }"
"#;

pub const DIV_TEMPLATE: &str = r#"
title = "Div"
shortcut = "div"
language = "html"
code = "<div>$end$</div>"
"#;

pub const PLAIN_TEMPLATE: &str = r#"
title = "Plain"
shortcut = "plain"
language = "c-sharp"
keywords = ["statement"]
"#;

/// Writes `(file name, contents)` pairs under `root`, creating parent directories.
pub fn write_templates(root: &Path, templates: &[(&str, &str)]) {
    for (name, contents) in templates {
        let path = root.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }
}

pub fn template(title: &str) -> Snippet {
    Snippet::new(title, title.to_lowercase(), Language::CSharp)
        .with_keywords(["meta-generate-test"])
        .with_file_name(title)
}

/// Emits one copy per suffix; cancels when `cancel` is set.
#[derive(Debug, Clone)]
pub struct Scripted {
    pub suffixes: Vec<String>,
    pub cancel: bool,
}

impl Command for Scripted {
    fn name(&self) -> &str {
        "scripted"
    }

    fn execute(&self, context: &mut ExecutionContext) {
        for suffix in &self.suffixes {
            let mut snippet = context.snippet().clone();
            snippet.title = format!("{}{}", snippet.title, suffix);
            context.push(snippet);
        }
        if self.cancel {
            context.cancel();
        }
    }
}

/// Factory returning the same scripted command list for every template.
#[derive(Debug, Clone)]
pub struct ScriptedFactory(pub Vec<Scripted>);

impl CommandFactory for ScriptedFactory {
    fn create_commands(&self, _snippet: &Snippet) -> Vec<Box<dyn Command>> {
        self.0
            .iter()
            .cloned()
            .map(|c| Box::new(c) as Box<dyn Command>)
            .collect()
    }
}

pub fn scripted(suffixes: &[&str], cancel: bool) -> Scripted {
    Scripted {
        suffixes: suffixes.iter().map(|s| s.to_string()).collect(),
        cancel,
    }
}
