//! Terminal rendering of the typeahead
//!
//! Only reads `TypeaheadView`; all behavior lives in the typeahead module.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::app_state::App;
use crate::theme;
use crate::typeahead::SuggestionRow;
use crate::widgets::popup;

const CLEAR_BUTTON_WIDTH: u16 = 11;
const INPUT_HEIGHT: u16 = 3;
const DROPDOWN_BORDER: u16 = 2;
const ROW_PREFIX_WIDTH: usize = 2;
const INSTRUCTIONS: &str = "When autocomplete results are available use up and down arrows to review and enter to select.";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

        let input_row = layout[0];
        let footer_area = layout[2];

        let [input_area, button_area] =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(CLEAR_BUTTON_WIDTH)])
                .areas(input_row);

        frame.render_widget(&self.input, input_area);
        render_clear_button(frame, button_area);
        self.render_footer(frame, footer_area);

        self.layout_regions.input_field = Some(input_area);
        self.layout_regions.clear_button = Some(button_area);
        self.render_dropdown(frame, input_area);
    }

    fn render_dropdown(&mut self, frame: &mut Frame, input_area: Rect) {
        self.layout_regions.clear_dropdown();

        let view = self.typeahead.view();
        if !view.is_dropdown_visible() {
            return;
        }

        let content_width = view.rows.iter().map(row_width).max().unwrap_or(0);
        let width = u16::try_from(content_width.saturating_add(ROW_PREFIX_WIDTH))
            .unwrap_or(u16::MAX)
            .saturating_add(DROPDOWN_BORDER + 1);
        let height = u16::try_from(view.rows.len())
            .unwrap_or(u16::MAX)
            .saturating_add(DROPDOWN_BORDER);
        let area = popup::popup_below_anchor(input_area, frame.area(), width, height);
        if area.height <= DROPDOWN_BORDER {
            return;
        }

        let items: Vec<ListItem> = view.rows.iter().map(row_item).collect();
        let row_count = items.len();
        // Scrolls so the cursor row stays on screen when the list is clipped
        let mut list_state = ListState::default().with_selected(view.active_index);

        popup::clear_area(frame, area);
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme::dropdown::BORDER))
                .style(Style::default().bg(theme::dropdown::BG)),
        );
        frame.render_stateful_widget(list, area, &mut list_state);

        let inner = popup::inset_rect(area, 1, 1);
        let offset = list_state.offset();
        self.layout_regions.dropdown_rows = Some(inner);
        self.layout_regions.dropdown_offset = offset;
        self.layout_regions.dropdown_row_count = row_count
            .saturating_sub(offset)
            .min(usize::from(inner.height));
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.config_warning {
            Some(warning) => Line::from(Span::styled(
                format!("Config: {}", warning),
                Style::default().fg(theme::footer::WARNING),
            )),
            None => Line::from(Span::styled(
                INSTRUCTIONS,
                Style::default().fg(theme::footer::HINT),
            )),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

fn render_clear_button(frame: &mut Frame, area: Rect) {
    let button = Paragraph::new("Clear")
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme::clear_button::LABEL).bold())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme::clear_button::BORDER)),
        );
    frame.render_widget(button, area);
}

fn category_label(row: &SuggestionRow) -> Option<String> {
    row.category.map(|category| format!("in {}", category.name))
}

fn row_width(row: &SuggestionRow) -> usize {
    let label_width = category_label(row).map(|l| l.width() + 2).unwrap_or(0);
    row.suggestion.title.width() + label_width
}

/// Title with the matched part emphasised, followed by the category
fn row_item<'a>(row: &SuggestionRow<'a>) -> ListItem<'a> {
    let (base, category_style, name_style) = if row.is_selected {
        let selected = Style::default()
            .fg(theme::dropdown::ITEM_SELECTED_FG)
            .bg(theme::dropdown::ITEM_SELECTED_BG);
        (selected, selected, selected.bold())
    } else {
        (
            Style::default().fg(theme::dropdown::TITLE_FG),
            Style::default().fg(theme::dropdown::CATEGORY_FG),
            Style::default().fg(theme::dropdown::CATEGORY_NAME_FG),
        )
    };

    let prefix = if row.is_selected { "► " } else { "  " };
    let mut spans = vec![Span::styled(prefix, base)];

    let title = row.suggestion.title.as_str();
    match row.highlight.clone() {
        Some(span) => {
            spans.push(Span::styled(&title[..span.start], base));
            spans.push(Span::styled(
                &title[span.clone()],
                base.add_modifier(theme::dropdown::MATCH_MODIFIER),
            ));
            spans.push(Span::styled(&title[span.end..], base));
        }
        None => spans.push(Span::styled(title, base)),
    }

    if let Some(category) = row.category {
        spans.push(Span::styled("  in ", category_style));
        spans.push(Span::styled(category.name.as_str(), name_style));
    }

    ListItem::new(Line::from(spans)).style(base)
}
