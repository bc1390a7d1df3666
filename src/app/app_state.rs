use ratatui::{
    style::{Color, Style},
    widgets::{Block, BorderType, Borders},
};
use tui_textarea::TextArea;

use crate::catalog::{Catalog, Suggestion};
use crate::config::TypeaheadConfig;
use crate::layout::LayoutRegions;
use crate::theme;
use crate::typeahead::{SelectHandler, Typeahead};

/// Holds the suggestion chosen by the user until the app exits
#[derive(Debug, Clone, Default)]
pub struct PendingSelection {
    chosen: Option<Suggestion>,
}

impl PendingSelection {
    pub fn chosen(&self) -> Option<&Suggestion> {
        self.chosen.as_ref()
    }
}

impl SelectHandler for PendingSelection {
    fn handle_select(&mut self, suggestion: &Suggestion) {
        self.chosen = Some(suggestion.clone());
    }
}

/// Creates the single-line search input
fn create_input_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Search for a book ")
            .title_style(Style::default().fg(theme::input::TITLE))
            .border_style(Style::default().fg(theme::input::BORDER)),
    );
    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text("Type at least two characters");
    textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));
    textarea
}

/// Application state
pub struct App {
    pub typeahead: Typeahead<PendingSelection>,
    pub input: TextArea<'static>,
    pub layout_regions: LayoutRegions,
    pub config_warning: Option<String>,
    pub(crate) should_quit: bool,
}

impl App {
    pub fn new(catalog: Catalog, config: TypeaheadConfig, config_warning: Option<String>) -> Self {
        Self {
            typeahead: Typeahead::new(catalog, config, PendingSelection::default()),
            input: create_input_textarea(),
            layout_regions: LayoutRegions::new(),
            config_warning,
            should_quit: false,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Text currently in the input field
    pub fn query(&self) -> String {
        self.input.lines().join("")
    }

    pub fn selection(&self) -> Option<&Suggestion> {
        self.typeahead.handler().chosen()
    }

    /// Consume the app and return what the user selected, if anything
    pub fn into_selection(self) -> Option<Suggestion> {
        self.typeahead.handler().chosen().cloned()
    }

    /// Replace the whole input field content
    pub(crate) fn set_input_text(&mut self, text: &str) {
        self.input.select_all();
        self.input.cut();
        self.input.insert_str(text);
    }
}
