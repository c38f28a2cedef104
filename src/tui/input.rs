use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;

/// Cursor glyph drawn at the insertion point of the focused field
pub const CURSOR: &str = "█";

/// Editable text buffer with a cursor and focus flag.
///
/// The cursor counts chars, not bytes, so multi-byte input edits cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor: usize,
    focused: bool,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    /// Remove the char before the cursor if it is `c`
    pub fn pop_if(&mut self, c: char) -> bool {
        if self.cursor > 0 && self.value.chars().nth(self.cursor - 1) == Some(c) {
            self.backspace();
            true
        } else {
            false
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Jump to the start of the previous word (for Option+Left)
    pub fn move_word_left(&mut self) {
        let chars: Vec<char> = self.value.chars().collect();
        self.cursor = word_boundary_left(&chars, self.cursor);
    }

    /// Jump past the next word (for Option+Right)
    pub fn move_word_right(&mut self) {
        let chars: Vec<char> = self.value.chars().collect();
        self.cursor = word_boundary_right(&chars, self.cursor);
    }

    /// Apply an editing key. Returns false when the key is not an edit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let has_alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Left if has_alt => self.move_word_left(),
            KeyCode::Right if has_alt => self.move_word_right(),
            // macOS: Option+Left/Right sends Alt+b / Alt+f
            KeyCode::Char('b') if has_alt => self.move_word_left(),
            KeyCode::Char('f') if has_alt => self.move_word_right(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => self.insert_char(c),
            _ => return false,
        }
        true
    }

    /// Value with the cursor glyph spliced in when focused
    pub fn display_text(&self) -> String {
        if !self.focused {
            return self.value.clone();
        }
        let at = self.byte_offset(self.cursor);
        let (before, after) = self.value.split_at(at);
        format!("{}{}{}", before, CURSOR, after)
    }

    /// Labelled lines for rendering inside a popup
    pub fn to_lines(&self, label: &str, label_style: Style, text_style: Style) -> Vec<Line<'static>> {
        let text = self.display_text();
        let mut lines = Vec::new();
        for (i, part) in text.split('\n').enumerate() {
            let prefix = if i == 0 {
                Span::styled(label.to_string(), label_style)
            } else {
                Span::raw(" ".repeat(label.chars().count()))
            };
            lines.push(Line::from(vec![prefix, Span::styled(part.to_string(), text_style)]));
        }
        lines
    }
}

fn word_boundary_left(chars: &[char], pos: usize) -> usize {
    if pos == 0 {
        return 0;
    }
    let mut i = pos.min(chars.len()) - 1;
    // Skip whitespace/punctuation
    while i > 0 && !chars[i].is_alphanumeric() {
        i -= 1;
    }
    // Skip word characters
    while i > 0 && chars[i - 1].is_alphanumeric() {
        i -= 1;
    }
    i
}

fn word_boundary_right(chars: &[char], pos: usize) -> usize {
    let len = chars.len();
    if pos >= len {
        return len;
    }
    let mut i = pos;
    while i < len && chars[i].is_alphanumeric() {
        i += 1;
    }
    while i < len && !chars[i].is_alphanumeric() {
        i += 1;
    }
    i
}
