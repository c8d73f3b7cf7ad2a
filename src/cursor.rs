use unicode_width::UnicodeWidthStr;

/// What kind of value the input holds.
///
/// Numeric inputs mirror form fields that expose no selection range: the
/// widget cannot ask where the caret sits, so hint acceptance always treats
/// them as cursor-at-end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputKind {
    #[default]
    Text,
    Numeric,
}

/// Unicode-aware single-line edit buffer.
///
/// The cursor is tracked as a char position; byte and display-column
/// positions are derived on demand so wide characters and multibyte
/// sequences stay intact under every edit.
#[derive(Clone)]
pub struct CursorBuffer {
    content: String,
    cursor: usize,
    kind: InputKind,
}

impl CursorBuffer {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            kind: InputKind::Text,
        }
    }

    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor = content.chars().count();
        Self {
            content,
            cursor,
            kind: InputKind::Text,
        }
    }

    #[must_use]
    pub fn numeric() -> Self {
        Self {
            kind: InputKind::Numeric,
            ..Self::empty()
        }
    }

    #[must_use]
    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    pub fn cursor_char_pos(&self) -> usize {
        self.cursor
    }

    pub fn cursor_byte_pos(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map_or(self.content.len(), |(i, _)| i)
    }

    /// Display column of the cursor, accounting for wide characters.
    pub fn cursor_display_pos(&self) -> usize {
        self.content[..self.cursor_byte_pos()].width()
    }

    /// Where the selection ends, for input kinds that have one.
    /// Numeric inputs report `None`.
    pub fn selection_end(&self) -> Option<usize> {
        match self.kind {
            InputKind::Text => Some(self.cursor),
            InputKind::Numeric => None,
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor == self.char_count()
    }

    fn accepts(&self, c: char) -> bool {
        match self.kind {
            InputKind::Text => true,
            InputKind::Numeric => {
                c.is_ascii_digit()
                    || (matches!(c, '-' | '+') && self.cursor == 0)
                    || (c == '.' && !self.content.contains('.'))
            }
        }
    }

    /// Insert at the cursor. Returns false when the input kind rejects the
    /// character (non-digits in a numeric field).
    pub fn insert_char(&mut self, c: char) -> bool {
        if !self.accepts(c) {
            return false;
        }
        let byte = self.cursor_byte_pos();
        self.content.insert(byte, c);
        self.cursor += 1;
        true
    }

    pub fn delete_char_before(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let byte = self.cursor_byte_pos();
        self.content.remove(byte);
        true
    }

    pub fn delete_char_after(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        let byte = self.cursor_byte_pos();
        self.content.remove(byte);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if !self.is_at_end() {
            self.cursor += 1;
        }
    }

    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn move_word_left(&mut self) {
        let chars: Vec<char> = self.content.chars().collect();
        while self.cursor > 0 && chars[self.cursor - 1].is_whitespace() {
            self.cursor -= 1;
        }
        while self.cursor > 0 && !chars[self.cursor - 1].is_whitespace() {
            self.cursor -= 1;
        }
    }

    pub fn move_word_right(&mut self) {
        let chars: Vec<char> = self.content.chars().collect();
        let len = chars.len();
        while self.cursor < len && !chars[self.cursor].is_whitespace() {
            self.cursor += 1;
        }
        while self.cursor < len && chars[self.cursor].is_whitespace() {
            self.cursor += 1;
        }
    }

    pub fn delete_word_before(&mut self) -> bool {
        let end_byte = self.cursor_byte_pos();
        let end_char = self.cursor;
        self.move_word_left();
        if self.cursor == end_char {
            return false;
        }
        let start_byte = self.cursor_byte_pos();
        self.content.replace_range(start_byte..end_byte, "");
        true
    }

    pub fn delete_to_start(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let byte = self.cursor_byte_pos();
        self.content.replace_range(..byte, "");
        self.cursor = 0;
        true
    }

    pub fn delete_to_end(&mut self) -> bool {
        let byte = self.cursor_byte_pos();
        if byte == self.content.len() {
            return false;
        }
        self.content.truncate(byte);
        true
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Replace the content wholesale, cursor to the end. Programmatic sets
    /// bypass the kind filter, matching how form values can be assigned
    /// strings the user could not have typed.
    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
        self.cursor = self.char_count();
    }

    pub fn into_content(self) -> String {
        self.content
    }
}
