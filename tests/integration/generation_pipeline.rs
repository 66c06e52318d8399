//! Integration tests for the per-template generation pipeline.

use snipgen::command::DirectiveCommandFactory;
use snipgen::error::{GenerationError, SourceError};
use snipgen::generation::SnippetGenerator;
use snipgen::snippet::{tags, Language, Snippet};
use snipgen::source::{FileTemplateSource, SearchScope};
use tempfile::TempDir;

use crate::integration::test_utils::{
    scripted, template, write_templates, ScriptedFactory, DIV_TEMPLATE, IF_TEMPLATE,
    PLAIN_TEMPLATE,
};

#[test]
fn test_outputs_are_concatenated_in_command_order() {
    let generator = SnippetGenerator::new(ScriptedFactory(vec![
        scripted(&[" a", " b"], false),
        scripted(&[], false),
        scripted(&[" c"], false),
    ]));
    let input = template("T");

    let titles: Vec<String> = generator
        .generate(&input)
        .unwrap()
        .map(|s| s.title)
        .collect();
    assert_eq!(titles, vec!["T a", "T b", "T c"]);
}

#[test]
fn test_auto_generated_tag_added_exactly_once() {
    let generator = SnippetGenerator::new(ScriptedFactory(vec![scripted(&[""], false)]));
    let mut input = template("T");
    input.add_tag(tags::AUTO_GENERATED);

    let out: Vec<Snippet> = generator.generate(&input).unwrap().collect();
    let stamped = out[0]
        .keywords
        .iter()
        .filter(|k| k.eq_ignore_ascii_case("meta-auto-generated"))
        .count();
    assert_eq!(stamped, 1);
}

#[test]
fn test_all_cancelled_yields_nothing() {
    let generator = SnippetGenerator::new(ScriptedFactory(vec![
        scripted(&[" a"], true),
        scripted(&[], true),
    ]));
    let input = template("T");
    assert_eq!(generator.generate(&input).unwrap().count(), 0);
}

#[test]
fn test_cancellation_does_not_affect_siblings() {
    let generator = SnippetGenerator::new(ScriptedFactory(vec![
        scripted(&[" a"], true),
        scripted(&[" b"], false),
    ]));
    let input = template("T");
    let titles: Vec<String> = generator.generate(&input).unwrap().map(|s| s.title).collect();
    assert_eq!(titles, vec!["T b"]);
}

#[test]
fn test_outputs_do_not_alias_input_or_each_other() {
    let generator = SnippetGenerator::new(ScriptedFactory(vec![scripted(&["", ""], false)]));
    let input = template("T");

    let mut out: Vec<Snippet> = generator.generate(&input).unwrap().collect();
    out[0].keywords.push("changed".to_string());
    out[0].title.push('!');

    assert_eq!(out[1].title, "T");
    assert!(!out[1].keywords.contains(&"changed".to_string()));
    assert_eq!(input.keywords, vec!["meta-generate-test"]);
    assert_eq!(input.title, "T");
}

#[test]
fn test_generate_is_idempotent() {
    let generator = SnippetGenerator::new(DirectiveCommandFactory::new());
    let input = Snippet::new("If", "if", Language::CSharp).with_keywords([
        "meta-generate-copy",
        "meta-generate-shortcut-prefix:x",
        "meta-generate-language:type-script",
    ]);

    let first: Vec<Snippet> = generator.generate(&input).unwrap().collect();
    let second: Vec<Snippet> = generator.generate(&input).unwrap().collect();
    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
}

#[test]
fn test_precondition_markup_exemption() {
    let generator = SnippetGenerator::new(DirectiveCommandFactory::new());

    let markup = Snippet::new("Div", "div", Language::Html);
    let out: Vec<Snippet> = generator.generate(&markup).unwrap().collect();
    assert_eq!(out.len(), 1);
    assert!(out[0].has_tag(tags::AUTO_GENERATED));

    let plain = Snippet::new("If", "if", Language::CSharp).with_keywords(["statement"]);
    assert!(matches!(
        generator.generate(&plain),
        Err(GenerationError::PreconditionViolated { .. })
    ));
}

#[test]
fn test_directive_commands_end_to_end() {
    let generator = SnippetGenerator::new(DirectiveCommandFactory::new());
    let input = Snippet::new("If", "if", Language::CSharp).with_keywords([
        "statement",
        "meta-generate-language:c-sharp",
        "meta-generate-title-suffix:(block)",
        "meta-generate-shortcut-prefix:x",
    ]);

    let out: Vec<Snippet> = generator.generate(&input).unwrap().collect();
    assert_eq!(out.len(), 2, "same-language retarget cancels");
    assert_eq!(out[0].title, "If (block)");
    assert_eq!(out[1].shortcut, "xif");
    for snippet in &out {
        assert_eq!(snippet.keywords, vec!["statement", "meta-auto-generated"]);
    }
}

#[test]
fn test_generate_from_directory_flattens_templates() {
    let temp_dir = TempDir::new().unwrap();
    write_templates(
        temp_dir.path(),
        &[("a/if.snippet.toml", IF_TEMPLATE), ("b/div.snippet.toml", DIV_TEMPLATE)],
    );
    let generator = SnippetGenerator::new(DirectiveCommandFactory::new());
    let source = FileTemplateSource::new();

    let out: Vec<Snippet> = generator
        .generate_from_directory(&source, temp_dir.path(), SearchScope::AllDirectories)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    let summary: Vec<(String, Language)> = out.iter().map(|s| (s.shortcut.clone(), s.language)).collect();
    assert_eq!(
        summary,
        vec![
            ("if".to_string(), Language::CSharp),
            ("if".to_string(), Language::VisualBasic),
            ("div".to_string(), Language::Html),
        ]
    );
}

#[test]
fn test_generate_from_directory_reports_each_bad_template() {
    let temp_dir = TempDir::new().unwrap();
    write_templates(
        temp_dir.path(),
        &[
            ("a_plain.snippet.toml", PLAIN_TEMPLATE),
            ("b_broken.snippet.toml", "title = "),
            ("c_div.snippet.toml", DIV_TEMPLATE),
        ],
    );
    let generator = SnippetGenerator::new(DirectiveCommandFactory::new());
    let source = FileTemplateSource::new();

    let results: Vec<Result<Snippet, GenerationError>> = generator
        .generate_from_directory(&source, temp_dir.path(), SearchScope::AllDirectories)
        .unwrap()
        .collect();

    assert_eq!(results.len(), 3);
    match &results[0] {
        Err(GenerationError::PreconditionViolated { identity }) => {
            assert!(identity.ends_with("a_plain.snippet.toml"))
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(matches!(
        &results[1],
        Err(GenerationError::Source(SourceError::Parse { .. }))
    ));
    assert_eq!(results[2].as_ref().unwrap().shortcut, "div");
}
