use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::io;
use tui_textarea::Input;

use super::app_state::App;
use crate::layout::{Region, region_at};
use crate::typeahead::{Effect, Key, TypeaheadEvent};

/// Map a terminal key onto the keys the typeahead distinguishes
fn typeahead_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Up => Key::ArrowUp,
        KeyCode::Down => Key::ArrowDown,
        _ => Key::Other,
    }
}

/// Keys that would break the input into several lines
fn inserts_newline(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j'))
}

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Paste(text) => self.handle_paste_event(text),
            Event::FocusGained => {
                self.typeahead.dispatch(TypeaheadEvent::FocusGained);
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Esc with nothing to dismiss leaves the app
        if key.code == KeyCode::Esc && !self.typeahead.state().is_open {
            self.should_quit = true;
            return;
        }

        let typeahead_key = typeahead_key(key.code);
        let effect = self.typeahead.dispatch(TypeaheadEvent::KeyPressed(typeahead_key));

        match effect {
            Effect::Select(_) => self.finish_selection(),
            Effect::PreventDefault => {}
            Effect::None => {
                if typeahead_key == Key::Other && !inserts_newline(&key) {
                    self.edit_input(Input::from(key));
                }
            }
        }
    }

    /// Handle pointer movement and clicks
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let region = region_at(&self.layout_regions, mouse.column, mouse.row);

        match (mouse.kind, region) {
            (MouseEventKind::Moved, Some(Region::DropdownRow(index))) => {
                self.typeahead.dispatch(TypeaheadEvent::SuggestionHovered(index));
            }
            (MouseEventKind::Down(MouseButton::Left), Some(Region::DropdownRow(index))) => {
                let effect = self.typeahead.dispatch(TypeaheadEvent::SuggestionPressed(index));
                if matches!(effect, Effect::Select(_)) {
                    self.finish_selection();
                }
            }
            (MouseEventKind::Down(MouseButton::Left), Some(Region::InputField)) => {
                self.typeahead.dispatch(TypeaheadEvent::FocusGained);
            }
            // Clear fires on release, like a button click
            (MouseEventKind::Up(MouseButton::Left), Some(Region::ClearButton)) => {
                self.set_input_text("");
                self.typeahead.dispatch(TypeaheadEvent::Cleared);
            }
            _ => {}
        }
    }

    /// Insert pasted text as a single line
    pub fn handle_paste_event(&mut self, text: String) {
        let single_line: String = text.lines().collect();
        if single_line.is_empty() {
            return;
        }

        self.input.insert_str(&single_line);
        self.dispatch_text_input();
    }

    fn edit_input(&mut self, input: Input) {
        if self.input.input(input) {
            self.dispatch_text_input();
        }
    }

    fn dispatch_text_input(&mut self) {
        let text = self.query();
        self.typeahead.dispatch(TypeaheadEvent::TextInput(text));
    }

    /// What happens after a selection is up to the app: it exits and reports it
    fn finish_selection(&mut self) {
        if self.selection().is_some() {
            self.should_quit = true;
        }
    }
}
