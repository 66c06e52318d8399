//! Keyword tags.
//!
//! A tag is a keyword of the form `meta-<name>` or `meta-<name>:<value>`.
//! Tag names are matched ASCII case-insensitively.

/// Reserved prefix shared by every tag keyword.
pub const META_PREFIX: &str = "meta-";

/// Name prefix of generation directives (`meta-generate...`).
pub const GENERATE_PREFIX: &str = "generate";

/// Stamped on every snippet produced by the generator.
pub const AUTO_GENERATED: &str = "auto-generated";

/// Secondary invocation keyword; expanded into a sibling snippet.
pub const ALTERNATIVE_SHORTCUT: &str = "alternative-shortcut";

/// Marks siblings whose title was suffixed with ` _`.
pub const TITLE_ENDS_WITH_UNDERSCORE: &str = "title-ends-with-underscore";

const VALUE_SEPARATOR: char = ':';

/// Result of a tag lookup on a snippet's keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagInfo {
    /// Position of the tag keyword in the snippet's keyword list.
    pub keyword_index: usize,
    /// Text after `:`; empty when the tag carries no value.
    pub value: String,
}

/// Builds the keyword for a value-less tag.
pub fn tag_keyword(name: &str) -> String {
    format!("{}{}", META_PREFIX, name)
}

/// Builds the keyword for a tag with a value.
pub fn tag_keyword_with_value(name: &str, value: &str) -> String {
    format!("{}{}{}{}", META_PREFIX, name, VALUE_SEPARATOR, value)
}

/// Case-insensitive `starts_with` that never splits a UTF-8 character.
pub(crate) fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.is_char_boundary(prefix.len())
        && text[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// Splits a tag keyword into `(name, value)`. Returns `None` for plain keywords.
pub(crate) fn parse_tag(keyword: &str) -> Option<(&str, &str)> {
    if !starts_with_ignore_case(keyword, META_PREFIX) {
        return None;
    }
    let rest = &keyword[META_PREFIX.len()..];
    match rest.split_once(VALUE_SEPARATOR) {
        Some((name, value)) => Some((name, value)),
        None => Some((rest, "")),
    }
}

/// Whether `keyword` is the tag `name`, with or without a value.
pub(crate) fn matches_tag(keyword: &str, name: &str) -> bool {
    parse_tag(keyword).is_some_and(|(tag, _)| tag.eq_ignore_ascii_case(name))
}

/// Whether `keyword` is a generation directive. A bare `meta-generate` names none.
pub(crate) fn is_generate_directive(keyword: &str) -> bool {
    parse_tag(keyword).is_some_and(|(tag, _)| {
        tag.len() > GENERATE_PREFIX.len() && starts_with_ignore_case(tag, GENERATE_PREFIX)
    })
}
