use ratatui::layout::Rect;

/// Component under a pointer position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    ClearButton,
    /// A dropdown row, by match index
    DropdownRow(usize),
}

/// Screen areas recorded during the last render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub input_field: Option<Rect>,
    pub clear_button: Option<Rect>,
    /// Inner area of the dropdown (borders excluded)
    pub dropdown_rows: Option<Rect>,
    /// Rows currently drawn, starting at `dropdown_offset`
    pub dropdown_row_count: usize,
    /// Match index of the first drawn row
    pub dropdown_offset: usize,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_dropdown(&mut self) {
        self.dropdown_rows = None;
        self.dropdown_row_count = 0;
        self.dropdown_offset = 0;
    }
}
