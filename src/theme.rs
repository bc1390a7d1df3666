//! Colors and modifiers used by the terminal front end.

pub mod input {
    use ratatui::style::Color;

    pub const BORDER: Color = Color::Cyan;
    pub const TITLE: Color = Color::Cyan;
}

pub mod clear_button {
    use ratatui::style::Color;

    pub const BORDER: Color = Color::Magenta;
    pub const LABEL: Color = Color::White;
}

pub mod dropdown {
    use ratatui::style::{Color, Modifier};

    pub const BORDER: Color = Color::Cyan;
    pub const BG: Color = Color::Black;
    pub const TITLE_FG: Color = Color::White;
    pub const CATEGORY_FG: Color = Color::DarkGray;
    pub const CATEGORY_NAME_FG: Color = Color::Magenta;
    pub const MATCH_MODIFIER: Modifier = Modifier::BOLD;
    pub const ITEM_SELECTED_BG: Color = Color::Cyan;
    pub const ITEM_SELECTED_FG: Color = Color::Black;
}

pub mod footer {
    use ratatui::style::Color;

    pub const HINT: Color = Color::DarkGray;
    pub const WARNING: Color = Color::Yellow;
}
