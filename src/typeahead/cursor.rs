//! Highlighted-row tracking for the match list.

/// Direction of a keyboard navigation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Index of the highlighted suggestion within the current match list
///
/// `None` means no suggestion is selected, which is the only valid state
/// while the match list is empty. Navigation never wraps around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionCursor {
    index: Option<usize>,
}

impl SelectionCursor {
    /// Create an inactive cursor
    pub fn new() -> Self {
        Self { index: None }
    }

    /// Cursor positioned at the start of a fresh match list of `len` entries
    pub fn reset(len: usize) -> Self {
        Self {
            index: (len > 0).then_some(0),
        }
    }

    /// Get the highlighted index, if any
    pub fn selected(&self) -> Option<usize> {
        self.index
    }

    pub fn is_active(&self) -> bool {
        self.index.is_some()
    }

    /// Step up or down, holding at either end
    ///
    /// An inactive cursor over a non-empty list lands on index 0 in either
    /// direction.
    pub fn moved(self, direction: Direction, len: usize) -> Self {
        let Some(current) = self.index else {
            return Self::reset(len);
        };

        let next = match direction {
            Direction::Down => current.saturating_add(1),
            Direction::Up => current.saturating_sub(1),
        };

        Self {
            index: clamp_index(next, len),
        }
    }

    /// Jump straight to `index`, as on pointer hover
    ///
    /// Out-of-range indices leave the cursor where it was.
    pub fn hovered(self, index: usize, len: usize) -> Self {
        if index < len { Self { index: Some(index) } } else { self }
    }

    /// Bring the cursor back into `[0, len - 1]`
    pub fn clamped(self, len: usize) -> Self {
        match self.index {
            Some(index) => Self {
                index: clamp_index(index, len),
            },
            None => Self::reset(len),
        }
    }
}

fn clamp_index(index: usize, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(index.min(len - 1))
    }
}

#[cfg(test)]
#[path = "cursor_tests.rs"]
mod cursor_tests;
