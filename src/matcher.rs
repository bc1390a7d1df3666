//! Substring matching of suggestion titles against the query.

use std::ops::Range;

use crate::catalog::Suggestion;

/// Queries shorter than this (in characters) match nothing
pub const MIN_QUERY_CHARS: usize = 2;

/// Result cap used when none is configured
pub const DEFAULT_MAX_RESULTS: usize = 6;

pub struct SuggestionMatcher;

impl SuggestionMatcher {
    /// Return the suggestions whose title contains `query`, ignoring case
    ///
    /// Source order is kept and the result holds at most `max_results` entries.
    /// Whitespace in the query is matched literally.
    pub fn filter<'a>(
        suggestions: &'a [Suggestion],
        query: &str,
        max_results: usize,
    ) -> Vec<&'a Suggestion> {
        if max_results == 0 || query.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }

        let query_lower = query.to_lowercase();

        suggestions
            .iter()
            .filter(|suggestion| suggestion.title.to_lowercase().contains(&query_lower))
            .take(max_results)
            .collect()
    }

    /// Byte range of the first case-insensitive occurrence of `query` in `title`
    ///
    /// Used by the view to highlight the matched part of a row.
    pub fn match_span(title: &str, query: &str) -> Option<Range<usize>> {
        let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
        if needle.is_empty() {
            return None;
        }

        title.char_indices().find_map(|(start, _)| {
            let mut matched = 0;
            for (offset, ch) in title[start..].char_indices() {
                for lower in ch.to_lowercase() {
                    if needle.get(matched) != Some(&lower) {
                        return None;
                    }
                    matched += 1;
                }
                if matched == needle.len() {
                    return Some(start..start + offset + ch.len_utf8());
                }
            }
            None
        })
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
