mod controller;
mod cursor;
mod typeahead_events;
mod typeahead_state;
mod view;

pub use controller::{SelectHandler, Typeahead};
pub use cursor::{Direction, SelectionCursor};
pub use typeahead_events::{Effect, Key, TypeaheadEvent};
pub use typeahead_state::{QueryState, Transition, reduce};
pub use view::{SuggestionRow, TypeaheadView};
