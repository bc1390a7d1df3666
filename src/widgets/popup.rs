use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a dropdown directly under `anchor`, kept inside `bounds`
pub fn popup_below_anchor(anchor: Rect, bounds: Rect, width: u16, height: u16) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let available_height = bounds.bottom().saturating_sub(popup_y);

    Rect {
        x: anchor.x,
        y: popup_y,
        width: width.min(anchor.width),
        height: height.min(available_height),
    }
}

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x + horizontal_margin,
        y: area.y + vertical_margin,
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
