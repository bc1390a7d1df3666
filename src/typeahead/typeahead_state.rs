//! Query state and the reducer that drives it.

use super::cursor::{Direction, SelectionCursor};
use super::typeahead_events::{Effect, Key, TypeaheadEvent};
use crate::catalog::Suggestion;
use crate::matcher::SuggestionMatcher;

/// Everything the typeahead remembers between events
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub text: String,
    pub is_open: bool,
    pub cursor: SelectionCursor,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The dropdown is shown only while open and there is something to show
    pub fn is_dropdown_visible(&self, match_count: usize) -> bool {
        self.is_open && match_count > 0
    }
}

/// Result of applying one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: QueryState,
    pub effect: Effect,
}

impl Transition {
    fn quiet(state: QueryState) -> Self {
        Self {
            state,
            effect: Effect::None,
        }
    }
}

/// Compute the next state for `event`
///
/// Matches are recomputed from `suggestions` on every call; nothing is cached
/// between events.
pub fn reduce(
    state: &QueryState,
    event: &TypeaheadEvent,
    suggestions: &[Suggestion],
    max_results: usize,
) -> Transition {
    let match_count = |text: &str| SuggestionMatcher::filter(suggestions, text, max_results).len();

    match event {
        TypeaheadEvent::TextInput(text) => Transition::quiet(QueryState {
            cursor: SelectionCursor::reset(match_count(text.as_str())),
            text: text.clone(),
            is_open: true,
        }),

        TypeaheadEvent::FocusGained => Transition::quiet(QueryState {
            is_open: true,
            ..state.clone()
        }),

        TypeaheadEvent::KeyPressed(Key::Enter) => {
            let count = match_count(state.text.as_str());
            let effect = match state.cursor.selected() {
                Some(index) if index < count => Effect::Select(index),
                _ => Effect::None,
            };
            Transition {
                state: state.clone(),
                effect,
            }
        }

        TypeaheadEvent::KeyPressed(Key::Escape) => Transition::quiet(QueryState {
            is_open: false,
            ..state.clone()
        }),

        TypeaheadEvent::KeyPressed(key @ (Key::ArrowUp | Key::ArrowDown)) => {
            let direction = if *key == Key::ArrowDown {
                Direction::Down
            } else {
                Direction::Up
            };
            let count = match_count(state.text.as_str());
            Transition {
                state: QueryState {
                    cursor: state.cursor.moved(direction, count),
                    ..state.clone()
                },
                effect: Effect::PreventDefault,
            }
        }

        TypeaheadEvent::KeyPressed(Key::Other) => Transition::quiet(QueryState {
            is_open: true,
            ..state.clone()
        }),

        TypeaheadEvent::SuggestionHovered(index) => {
            let count = match_count(state.text.as_str());
            if *index >= count {
                log::debug!("Ignoring hover on stale row {} ({} matches)", index, count);
            }
            Transition::quiet(QueryState {
                cursor: state.cursor.hovered(*index, count),
                ..state.clone()
            })
        }

        TypeaheadEvent::SuggestionPressed(index) => {
            let count = match_count(state.text.as_str());
            let effect = if *index < count {
                Effect::Select(*index)
            } else {
                log::debug!("Ignoring press on stale row {} ({} matches)", index, count);
                Effect::None
            };
            Transition {
                state: state.clone(),
                effect,
            }
        }

        TypeaheadEvent::Cleared => Transition::quiet(QueryState {
            cursor: SelectionCursor::reset(match_count("")),
            text: String::new(),
            is_open: state.is_open,
        }),
    }
}

#[cfg(test)]
#[path = "typeahead_state_tests.rs"]
mod typeahead_state_tests;
