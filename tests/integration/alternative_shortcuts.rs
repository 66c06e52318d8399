//! Integration tests for the alternative-shortcut pass.

use snipgen::command::DirectiveCommandFactory;
use snipgen::error::GenerationError;
use snipgen::generation::{expand_alternative_shortcuts, SnippetGenerator};
use snipgen::snippet::{tags, Language, Snippet};

use crate::integration::test_utils::template;

fn with_alternative(mut snippet: Snippet, shortcut: &str) -> Snippet {
    snippet
        .keywords
        .push(tags::tag_keyword_with_value(tags::ALTERNATIVE_SHORTCUT, shortcut));
    snippet
}

#[test]
fn test_reference_example() {
    let snippet = Snippet::new("T", "orig", Language::CSharp)
        .with_keywords(["foo", "meta-alternative-shortcut:bar"])
        .with_file_name("f");
    let mut batch = vec![snippet];

    let siblings: Vec<Snippet> = expand_alternative_shortcuts(&mut batch)
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(siblings.len(), 1);
    assert_eq!(siblings[0].shortcut, "bar");
    assert_eq!(siblings[0].title, "T _");
    assert_eq!(siblings[0].file_name_suggestion, "f_");
    assert_eq!(siblings[0].keywords, vec!["foo", "meta-title-ends-with-underscore"]);
    assert_eq!(batch[0].keywords, vec!["foo"]);
}

#[test]
fn test_m_of_k_tagged_in_batch_order() {
    let mut batch = vec![
        with_alternative(template("A"), "aa"),
        template("B"),
        with_alternative(template("C"), "cc"),
        template("D"),
        with_alternative(template("E"), "ee"),
    ];

    let shortcuts: Vec<String> = expand_alternative_shortcuts(&mut batch)
        .map(|r| r.unwrap().shortcut)
        .collect();

    assert_eq!(shortcuts, vec!["aa", "cc", "ee"]);
    for snippet in &batch {
        assert!(snippet.try_get_tag(tags::ALTERNATIVE_SHORTCUT).is_none());
    }
}

#[test]
fn test_tag_lookup_is_case_insensitive() {
    let mut batch = vec![template("A").with_keywords(["META-ALTERNATIVE-SHORTCUT:aa"])];
    let siblings: Vec<_> = expand_alternative_shortcuts(&mut batch).collect();
    assert_eq!(siblings.len(), 1);
    assert_eq!(siblings[0].as_ref().unwrap().shortcut, "aa");
    assert!(batch[0].keywords.is_empty());
}

#[test]
fn test_malformed_entry_does_not_stop_the_pass() {
    let mut batch = vec![
        template("A").with_keywords(["meta-alternative-shortcut"]),
        with_alternative(template("B"), "bb"),
    ];

    let results: Vec<Result<Snippet, GenerationError>> =
        expand_alternative_shortcuts(&mut batch).collect();

    assert!(matches!(&results[0], Err(GenerationError::MalformedTag { .. })));
    assert_eq!(results[1].as_ref().unwrap().shortcut, "bb");
}

#[test]
fn test_siblings_are_independent_of_batch_entries() {
    let mut batch = vec![with_alternative(template("A"), "aa")];
    let mut siblings: Vec<Snippet> = expand_alternative_shortcuts(&mut batch)
        .collect::<Result<_, _>>()
        .unwrap();

    siblings[0].keywords.clear();
    assert_eq!(batch[0].keywords, vec!["meta-generate-test"]);
}

#[test]
fn test_generated_batch_keeps_auto_generated_tag_on_siblings() {
    let generator = SnippetGenerator::new(DirectiveCommandFactory::new());
    let input = Snippet::new("If", "if", Language::CSharp)
        .with_keywords(["meta-generate-copy", "meta-alternative-shortcut:iff"])
        .with_file_name("If");

    let mut batch: Vec<Snippet> = generator.generate(&input).unwrap().collect();
    let siblings: Vec<Snippet> = expand_alternative_shortcuts(&mut batch)
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(batch[0].keywords, vec!["meta-auto-generated"]);
    assert_eq!(
        siblings[0].keywords,
        vec!["meta-auto-generated", "meta-title-ends-with-underscore"]
    );
    assert_eq!(siblings[0].file_name_suggestion, "If_");
}
