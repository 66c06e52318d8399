//! Alternative-shortcut expansion.
//!
//! A snippet tagged `meta-alternative-shortcut:<value>` is also exposed under
//! `<value>`. The tag keyword is removed from the batch entry in place and a sibling
//! is yielded with the new shortcut, a ` _` title suffix, the
//! `title-ends-with-underscore` tag and a `_` file-name suffix.

use crate::error::GenerationError;
use crate::snippet::{tags, Snippet};
use std::iter::FusedIterator;
use tracing::debug;

/// Expands every tagged entry of `batch` into a sibling, in batch order.
///
/// Entries are mutated as the iterator advances; an entry that is never reached
/// keeps its tag.
pub fn expand_alternative_shortcuts(batch: &mut [Snippet]) -> AlternativeShortcuts<'_> {
    AlternativeShortcuts {
        entries: batch.iter_mut(),
    }
}

pub struct AlternativeShortcuts<'a> {
    entries: std::slice::IterMut<'a, Snippet>,
}

impl Iterator for AlternativeShortcuts<'_> {
    type Item = Result<Snippet, GenerationError>;

    fn next(&mut self) -> Option<Self::Item> {
        for snippet in self.entries.by_ref() {
            let Some(info) = snippet.try_get_tag(tags::ALTERNATIVE_SHORTCUT) else {
                continue;
            };

            let tagged = snippet
                .keywords
                .iter()
                .filter(|k| tags::matches_tag(k, tags::ALTERNATIVE_SHORTCUT))
                .count();
            if tagged > 1 {
                return Some(Err(malformed(
                    snippet,
                    &format!("{} alternative shortcuts, expected one", tagged),
                )));
            }

            let shortcut = info.value.trim();
            if shortcut.is_empty() {
                return Some(Err(malformed(snippet, "missing shortcut value")));
            }
            let shortcut = shortcut.to_string();

            // `try_get_tag` only returns indices into `keywords`.
            snippet.remove_keyword_at(info.keyword_index);

            debug!(template = %snippet.identity(), shortcut = %shortcut, "Alternative shortcut");
            return Some(Ok(sibling(snippet, shortcut)));
        }
        None
    }
}

impl FusedIterator for AlternativeShortcuts<'_> {}

fn sibling(snippet: &Snippet, shortcut: String) -> Snippet {
    let mut sibling = snippet.clone();
    sibling.shortcut = shortcut;
    sibling.suffix_title(" _");
    sibling.add_tag(tags::TITLE_ENDS_WITH_UNDERSCORE);
    sibling.suffix_file_name("_");
    sibling
}

fn malformed(snippet: &Snippet, message: &str) -> GenerationError {
    GenerationError::MalformedTag {
        identity: snippet.identity(),
        tag: tags::ALTERNATIVE_SHORTCUT.to_string(),
        message: message.to_string(),
    }
}
