//! Saved records list

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::data::{Record, RecordId};

/// Selection and scroll state for the list
#[derive(Debug, Clone, Default)]
pub struct RecordListState {
    pub selected: usize,
    pub offset: usize,
}

impl RecordListState {
    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Keep the selection inside the list and visible in `height` rows
    pub fn clamp(&mut self, len: usize, height: usize) {
        if len == 0 {
            self.selected = 0;
            self.offset = 0;
            return;
        }
        self.selected = self.selected.min(len - 1);
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if height > 0 && self.selected >= self.offset + height {
            self.offset = self.selected + 1 - height;
        }
    }
}

/// Saved records widget
pub struct RecordList<'a> {
    records: &'a [Record],
    /// Record currently loaded in the form, if any
    editing: Option<RecordId>,
    focused: bool,
}

impl<'a> RecordList<'a> {
    pub fn new(records: &'a [Record], editing: Option<RecordId>, focused: bool) -> Self {
        Self {
            records,
            editing,
            focused,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, state: &mut RecordListState) {
        let border_color = if self.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .title(format!(" Saved Data ({}) ", self.records.len()))
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.records.is_empty() {
            Paragraph::new(Span::styled(
                "No saved records yet",
                Style::default().fg(Color::DarkGray),
            ))
            .render(inner, buf);
            return;
        }

        let height = inner.height as usize;
        state.clamp(self.records.len(), height);

        let lines: Vec<Line> = self
            .records
            .iter()
            .enumerate()
            .skip(state.offset)
            .take(height)
            .map(|(i, record)| self.line(record, i == state.selected))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }

    fn line(&self, record: &Record, selected: bool) -> Line<'static> {
        let label = Style::default().add_modifier(Modifier::BOLD);
        let marker = if self.editing == Some(record.id) {
            "✎ "
        } else {
            "  "
        };

        let mut line = Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled("Name: ", label),
            Span::raw(record.name.clone()),
            Span::styled(", Employee ID: ", label),
            Span::raw(record.employee_id.clone()),
            Span::styled(", City: ", label),
            Span::raw(record.city.label()),
            Span::styled(", Gender: ", label),
            Span::raw(record.gender.summary()),
        ]);

        if selected && self.focused {
            line = line.style(Style::default().bg(Color::DarkGray));
        }
        line
    }
}
