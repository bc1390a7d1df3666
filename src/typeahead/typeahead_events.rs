/// Keys the typeahead reacts to
///
/// Everything that is not one of the four named keys collapses into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    ArrowUp,
    ArrowDown,
    Other,
}

/// Discrete input delivered by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeaheadEvent {
    /// The input text changed to the given value
    TextInput(String),
    FocusGained,
    KeyPressed(Key),
    /// Pointer moved over the row at this match index
    SuggestionHovered(usize),
    /// Pointer pressed on the row at this match index
    SuggestionPressed(usize),
    /// The clear action was invoked
    Cleared,
}

/// Side effect the host must carry out after an event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Effect {
    #[default]
    None,
    /// Suppress the host's default handling of the key (scrolling, caret moves)
    PreventDefault,
    /// The suggestion at this match index was chosen
    Select(usize),
}
