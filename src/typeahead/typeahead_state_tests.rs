//! Tests for the typeahead reducer

use proptest::prelude::*;

use super::*;

const MAX: usize = 6;

fn books() -> Vec<Suggestion> {
    vec![
        Suggestion::new(1, "Dune", "sci-fi"),
        Suggestion::new(2, "Dune Messiah", "sci-fi"),
        Suggestion::new(3, "Children of Dune", "sci-fi"),
        Suggestion::new(4, "Emma", "classics"),
    ]
}

fn apply(state: &QueryState, event: TypeaheadEvent) -> Transition {
    reduce(state, &event, &books(), MAX)
}

fn typed(text: &str) -> QueryState {
    apply(&QueryState::new(), TypeaheadEvent::TextInput(text.to_string())).state
}

#[test]
fn test_initial_state_is_closed_and_empty() {
    let state = QueryState::new();
    assert_eq!(state.text, "");
    assert!(!state.is_open);
    assert!(state.cursor.selected().is_none());
}

#[test]
fn test_text_input_opens_and_resets_cursor() {
    let state = typed("dune");
    assert_eq!(state.text, "dune");
    assert!(state.is_open);
    assert_eq!(state.cursor.selected(), Some(0));
}

#[test]
fn test_text_input_resets_cursor_even_when_moved() {
    let state = typed("dune");
    let state = apply(&state, TypeaheadEvent::KeyPressed(Key::ArrowDown)).state;
    assert_eq!(state.cursor.selected(), Some(1));

    let state = apply(&state, TypeaheadEvent::TextInput("dun".to_string())).state;
    assert_eq!(state.cursor.selected(), Some(0));
}

#[test]
fn test_text_input_without_matches_deactivates_cursor() {
    let state = typed("zz");
    assert!(state.is_open);
    assert!(state.cursor.selected().is_none());
    assert!(!state.is_dropdown_visible(0));
}

#[test]
fn test_focus_opens() {
    let transition = apply(&QueryState::new(), TypeaheadEvent::FocusGained);
    assert!(transition.state.is_open);
    assert_eq!(transition.effect, Effect::None);
}

#[test]
fn test_enter_selects_highlighted_suggestion() {
    let state = typed("dune");
    let state = apply(&state, TypeaheadEvent::KeyPressed(Key::ArrowDown)).state;

    let transition = apply(&state, TypeaheadEvent::KeyPressed(Key::Enter));

    assert_eq!(transition.effect, Effect::Select(1));
    // Enter neither closes nor clears on its own
    assert_eq!(transition.state, state);
}

#[test]
fn test_enter_with_no_matches_is_noop() {
    let state = typed("zz");
    let transition = apply(&state, TypeaheadEvent::KeyPressed(Key::Enter));
    assert_eq!(transition.effect, Effect::None);
    assert_eq!(transition.state, state);
}

#[test]
fn test_escape_closes_and_keeps_text_and_cursor() {
    let state = typed("dune");
    let state = apply(&state, TypeaheadEvent::KeyPressed(Key::ArrowDown)).state;

    let closed = apply(&state, TypeaheadEvent::KeyPressed(Key::Escape)).state;

    assert!(!closed.is_open);
    assert_eq!(closed.text, "dune");
    assert_eq!(closed.cursor, state.cursor);
}

#[test]
fn test_escape_twice_equals_once() {
    let state = typed("dune");
    let once = apply(&state, TypeaheadEvent::KeyPressed(Key::Escape)).state;
    let twice = apply(&once, TypeaheadEvent::KeyPressed(Key::Escape)).state;
    assert_eq!(once, twice);
}

#[test]
fn test_arrows_prevent_default_and_clamp() {
    let state = typed("dune");

    let up = apply(&state, TypeaheadEvent::KeyPressed(Key::ArrowUp));
    assert_eq!(up.effect, Effect::PreventDefault);
    assert_eq!(up.state.cursor.selected(), Some(0));

    let mut state = up.state;
    for _ in 0..2 {
        state = apply(&state, TypeaheadEvent::KeyPressed(Key::ArrowDown)).state;
    }
    assert_eq!(state.cursor.selected(), Some(2));

    let down = apply(&state, TypeaheadEvent::KeyPressed(Key::ArrowDown));
    assert_eq!(down.effect, Effect::PreventDefault);
    assert_eq!(down.state.cursor.selected(), Some(2));
    assert!(down.state.is_open);
}

#[test]
fn test_arrows_with_no_matches_leave_cursor_inactive() {
    let state = typed("zz");
    let transition = apply(&state, TypeaheadEvent::KeyPressed(Key::ArrowDown));
    assert_eq!(transition.effect, Effect::PreventDefault);
    assert!(transition.state.cursor.selected().is_none());
}

#[test]
fn test_other_key_reopens_after_escape() {
    let state = typed("dune");
    let closed = apply(&state, TypeaheadEvent::KeyPressed(Key::Escape)).state;

    let reopened = apply(&closed, TypeaheadEvent::KeyPressed(Key::Other)).state;

    assert!(reopened.is_open);
    assert_eq!(reopened.text, "dune");
}

#[test]
fn test_escape_then_typing_reopens_dropdown() {
    let state = typed("du");
    assert!(state.is_dropdown_visible(3));

    let closed = apply(&state, TypeaheadEvent::KeyPressed(Key::Escape)).state;
    assert!(!closed.is_dropdown_visible(3));

    let state = apply(&closed, TypeaheadEvent::KeyPressed(Key::Other)).state;
    let state = apply(&state, TypeaheadEvent::TextInput("dun".to_string())).state;
    assert!(state.is_open);
}

#[test]
fn test_hover_sets_cursor() {
    let state = typed("dune");
    let state = apply(&state, TypeaheadEvent::SuggestionHovered(2)).state;
    assert_eq!(state.cursor.selected(), Some(2));
}

#[test]
fn test_hover_on_stale_row_is_ignored() {
    let state = typed("dune");
    let hovered = apply(&state, TypeaheadEvent::SuggestionHovered(9)).state;
    assert_eq!(hovered, state);
}

#[test]
fn test_press_selects_row_without_moving_cursor() {
    let state = typed("dune");
    let transition = apply(&state, TypeaheadEvent::SuggestionPressed(2));
    assert_eq!(transition.effect, Effect::Select(2));
    assert_eq!(transition.state.cursor.selected(), Some(0));
}

#[test]
fn test_press_on_stale_row_is_noop() {
    let state = typed("zz");
    let transition = apply(&state, TypeaheadEvent::SuggestionPressed(0));
    assert_eq!(transition.effect, Effect::None);
}

#[test]
fn test_clear_empties_text_and_keeps_visibility_flag() {
    let state = typed("dune");
    let cleared = apply(&state, TypeaheadEvent::Cleared).state;
    assert_eq!(cleared.text, "");
    assert!(cleared.is_open);
    assert!(cleared.cursor.selected().is_none());

    let closed = apply(&state, TypeaheadEvent::KeyPressed(Key::Escape)).state;
    let cleared = apply(&closed, TypeaheadEvent::Cleared).state;
    assert!(!cleared.is_open);
}

fn event_strategy() -> impl Strategy<Value = TypeaheadEvent> {
    prop_oneof![
        "[a-z ]{0,5}".prop_map(TypeaheadEvent::TextInput),
        Just(TypeaheadEvent::FocusGained),
        Just(TypeaheadEvent::KeyPressed(Key::Enter)),
        Just(TypeaheadEvent::KeyPressed(Key::Escape)),
        Just(TypeaheadEvent::KeyPressed(Key::ArrowUp)),
        Just(TypeaheadEvent::KeyPressed(Key::ArrowDown)),
        Just(TypeaheadEvent::KeyPressed(Key::Other)),
        (0usize..8).prop_map(TypeaheadEvent::SuggestionHovered),
        (0usize..8).prop_map(TypeaheadEvent::SuggestionPressed),
        Just(TypeaheadEvent::Cleared),
    ]
}

// For any event sequence, the cursor is a valid index into the current matches
// when they exist, is inactive otherwise, and any Select points at a real match.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_cursor_always_valid(events in prop::collection::vec(event_strategy(), 0..30)) {
        let suggestions = books();
        let mut state = QueryState::new();

        for event in events {
            let transition = reduce(&state, &event, &suggestions, MAX);
            state = transition.state;

            let count = SuggestionMatcher::filter(&suggestions, &state.text, MAX).len();
            match state.cursor.selected() {
                Some(index) => prop_assert!(index < count),
                None => prop_assert_eq!(count, 0),
            }
            if let Effect::Select(index) = transition.effect {
                prop_assert!(index < count);
            }
        }
    }
}
