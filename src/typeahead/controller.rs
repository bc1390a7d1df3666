//! Stateful wrapper around the reducer.

use crate::catalog::{Catalog, Suggestion};
use crate::config::TypeaheadConfig;
use crate::matcher::SuggestionMatcher;

use super::typeahead_events::{Effect, TypeaheadEvent};
use super::typeahead_state::{QueryState, reduce};
use super::view::{SuggestionRow, TypeaheadView};

/// Receives the suggestion the user committed to
pub trait SelectHandler {
    fn handle_select(&mut self, suggestion: &Suggestion);
}

impl<F> SelectHandler for F
where
    F: FnMut(&Suggestion),
{
    fn handle_select(&mut self, suggestion: &Suggestion) {
        self(suggestion)
    }
}

/// Owns the query state and reports selections to `H`
///
/// The handler is called exactly once per `Effect::Select`; closing or
/// clearing afterwards is left to the caller.
pub struct Typeahead<H> {
    catalog: Catalog,
    config: TypeaheadConfig,
    state: QueryState,
    handler: H,
}

impl<H: SelectHandler> Typeahead<H> {
    pub fn new(catalog: Catalog, config: TypeaheadConfig, handler: H) -> Self {
        Self {
            catalog,
            config,
            state: QueryState::new(),
            handler,
        }
    }

    /// Apply one event and return the effect the host has to honour
    pub fn dispatch(&mut self, event: TypeaheadEvent) -> Effect {
        let transition = reduce(
            &self.state,
            &event,
            &self.catalog.suggestions,
            self.max_results(),
        );
        self.state = transition.state;

        if let Effect::Select(index) = transition.effect {
            let max_results = self.max_results();
            let matches =
                SuggestionMatcher::filter(&self.catalog.suggestions, &self.state.text, max_results);
            if let Some(suggestion) = matches.get(index) {
                log::debug!("Selected suggestion {} ({})", suggestion.id, suggestion.title);
                self.handler.handle_select(suggestion);
            }
        }

        transition.effect
    }

    /// Current matches, recomputed on each call
    pub fn matches(&self) -> Vec<&Suggestion> {
        SuggestionMatcher::filter(
            &self.catalog.suggestions,
            &self.state.text,
            self.max_results(),
        )
    }

    pub fn view(&self) -> TypeaheadView<'_> {
        let active_index = self.state.cursor.selected();
        let rows = self
            .matches()
            .into_iter()
            .enumerate()
            .map(|(index, suggestion)| SuggestionRow {
                index,
                suggestion,
                category: self.catalog.category_for(suggestion),
                is_selected: active_index == Some(index),
                highlight: SuggestionMatcher::match_span(&suggestion.title, &self.state.text),
            })
            .collect();

        TypeaheadView {
            text: &self.state.text,
            is_open: self.state.is_open,
            rows,
            active_index,
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn text(&self) -> &str {
        &self.state.text
    }

    pub fn is_dropdown_visible(&self) -> bool {
        self.state.is_dropdown_visible(self.matches().len())
    }

    /// Swap in a new catalog, keeping the cursor inside the new match list
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        let count = self.matches().len();
        self.state.cursor = self.state.cursor.clamped(count);
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Back to empty text, closed dropdown and no selection
    pub fn reset(&mut self) {
        self.state = QueryState::new();
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    fn max_results(&self) -> usize {
        self.config.max_results.get()
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
