//! Search field editing (pure state transitions).
//!
//! All functions are pure - no side effects, testable without TUI.
//! The cursor is a character index, not a byte offset.

/// Text typed into the search bar plus the cursor position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchField {
    text: String,
    cursor: usize,
}

impl SearchField {
    /// Field pre-filled with `text`, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Typed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

/// Insert a character at the cursor and advance the cursor.
pub fn handle_char_input(mut field: SearchField, ch: char) -> SearchField {
    let at = field.byte_offset(field.cursor);
    field.text.insert(at, ch);
    field.cursor += 1;
    field
}

/// Delete the character before the cursor. No-op at position 0.
pub fn handle_backspace(mut field: SearchField) -> SearchField {
    if field.cursor == 0 {
        return field;
    }
    let at = field.byte_offset(field.cursor - 1);
    field.text.remove(at);
    field.cursor -= 1;
    field
}

/// Move cursor left by one position. Saturates at 0.
pub fn handle_cursor_left(mut field: SearchField) -> SearchField {
    field.cursor = field.cursor.saturating_sub(1);
    field
}

/// Move cursor right by one position. Saturates at the text length.
pub fn handle_cursor_right(mut field: SearchField) -> SearchField {
    field.cursor = (field.cursor + 1).min(field.text.chars().count());
    field
}

/// Remove everything.
pub fn clear_field(_field: SearchField) -> SearchField {
    SearchField::default()
}

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
