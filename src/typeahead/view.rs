//! Read-only snapshot handed to the rendering layer.

use std::ops::Range;

use crate::catalog::{Category, Suggestion};

/// One dropdown row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRow<'a> {
    /// Position within the match list; pass it back in hover/press events
    pub index: usize,
    pub suggestion: &'a Suggestion,
    /// `None` when the suggestion points at an unknown category
    pub category: Option<&'a Category>,
    pub is_selected: bool,
    /// Byte range of the matched part of the title
    pub highlight: Option<Range<usize>>,
}

/// Everything a renderer needs after an event has been applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeaheadView<'a> {
    pub text: &'a str,
    pub is_open: bool,
    pub rows: Vec<SuggestionRow<'a>>,
    pub active_index: Option<usize>,
}

impl<'a> TypeaheadView<'a> {
    pub fn is_dropdown_visible(&self) -> bool {
        self.is_open && !self.rows.is_empty()
    }

    pub fn active_suggestion(&self) -> Option<&'a Suggestion> {
        self.active_index
            .and_then(|index| self.rows.get(index))
            .map(|row| row.suggestion)
    }
}
