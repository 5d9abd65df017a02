//! Single-line text input with cursor management

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Which characters an input accepts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFilter {
    #[default]
    Any,
    /// ASCII digits only (employee ID)
    Digits,
}

impl InputFilter {
    fn accepts(&self, c: char) -> bool {
        match self {
            InputFilter::Any => !c.is_control(),
            InputFilter::Digits => c.is_ascii_digit(),
        }
    }
}

/// Text input state. The cursor counts characters, not bytes.
#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    input: String,
    cursor: usize,
    filter: InputFilter,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(filter: InputFilter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    /// Set the input value and move cursor to end
    pub fn set(&mut self, value: &str) {
        self.input = value.to_string();
        self.cursor = self.char_len();
    }

    pub fn value(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Insert a character at the cursor. Returns false if the filter
    /// rejected it.
    pub fn insert_char(&mut self, c: char) -> bool {
        if !self.filter.accepts(c) {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.input.insert(at, c);
        self.cursor += 1;
        true
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.input.remove(at);
        }
    }

    /// Delete character at cursor (delete)
    pub fn delete_forward(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.input.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Delete from cursor to start of line (Ctrl+U)
    pub fn delete_to_start(&mut self) {
        let at = self.byte_index(self.cursor);
        self.input.drain(..at);
        self.cursor = 0;
    }

    /// Delete word before cursor (Ctrl+W)
    pub fn delete_word(&mut self) {
        let chars: Vec<char> = self.input.chars().collect();
        let end = self.cursor;
        let mut start = end;
        while start > 0 && chars[start - 1] == ' ' {
            start -= 1;
        }
        while start > 0 && chars[start - 1] != ' ' {
            start -= 1;
        }
        let (from, to) = (self.byte_index(start), self.byte_index(end));
        self.input.drain(from..to);
        self.cursor = start;
    }

    /// Render the text, with a placeholder when empty and a block cursor
    /// when focused
    pub fn render(
        &self,
        area: Rect,
        buf: &mut Buffer,
        style: Style,
        placeholder: Option<(&str, Style)>,
        focused: bool,
    ) {
        match placeholder {
            Some((text, placeholder_style)) if self.input.is_empty() => {
                Paragraph::new(text).style(placeholder_style).render(area, buf);
            }
            _ => Paragraph::new(self.input.as_str()).style(style).render(area, buf),
        }

        if focused && area.width > 0 {
            let before = &self.input[..self.byte_index(self.cursor)];
            let offset = before.width() as u16;
            let cursor_x = area.x + offset.min(area.width.saturating_sub(1));
            buf[(cursor_x, area.y)].set_style(Style::default().add_modifier(Modifier::REVERSED));
        }
    }

    fn char_len(&self) -> usize {
        self.input.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }
}
