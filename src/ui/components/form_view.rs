//! Record form: labelled inputs with inline validation messages

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::form::{EditMode, Field, FormSession};
use crate::ui::events::Focus;

use super::TextInputState;

/// Form widget. Field values come from the session; the text inputs only
/// supply cursor positions for the two free-text fields.
pub struct FormView<'a> {
    session: &'a FormSession,
    name: &'a TextInputState,
    employee_id: &'a TextInputState,
    focus: Focus,
}

impl<'a> FormView<'a> {
    pub fn new(
        session: &'a FormSession,
        name: &'a TextInputState,
        employee_id: &'a TextInputState,
        focus: Focus,
    ) -> Self {
        Self {
            session,
            name,
            employee_id,
            focus,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let title = match self.session.mode() {
            EditMode::Creating => " New record ".to_string(),
            EditMode::Editing { original_name, .. } => format!(" Editing {original_name} "),
        };
        let border_color = if self.session.is_editing() {
            Color::Yellow
        } else {
            Color::Cyan
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical([
            Constraint::Length(1), // Name label
            Constraint::Length(1), // Name input
            Constraint::Length(1),
            Constraint::Length(1), // Employee ID label
            Constraint::Length(1), // Employee ID input
            Constraint::Length(1),
            Constraint::Length(1), // City label
            Constraint::Length(1), // City choice
            Constraint::Length(1),
            Constraint::Length(1), // Gender label
            Constraint::Length(1), // Checkboxes
            Constraint::Length(1),
            Constraint::Length(1), // Save button
            Constraint::Min(0),
        ])
        .split(inner);

        self.render_label(rows[0], buf, "Name", Field::Name);
        self.render_text(rows[1], buf, self.name, "Enter Name", Focus::Name);

        self.render_label(rows[3], buf, "Employee ID", Field::EmployeeId);
        self.render_text(
            rows[4],
            buf,
            self.employee_id,
            "Enter Employee ID",
            Focus::EmployeeId,
        );

        self.render_label(rows[6], buf, "City", Field::City);
        self.render_city(rows[7], buf);

        self.render_label(rows[9], buf, "Gender", Field::Gender);
        self.render_gender(rows[10], buf);

        self.render_save(rows[12], buf);
    }

    fn render_label(&self, area: Rect, buf: &mut Buffer, label: &str, field: Field) {
        let mut spans = vec![
            Span::styled(label.to_string(), Style::default().fg(Color::White)),
            Span::styled("*", Style::default().fg(Color::Red)),
            Span::raw(":"),
        ];
        if let Some(message) = self.session.errors().get(field) {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red),
            ));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn render_text(
        &self,
        area: Rect,
        buf: &mut Buffer,
        input: &TextInputState,
        placeholder: &str,
        focus: Focus,
    ) {
        let focused = self.focus == focus;
        let [marker, field] =
            Layout::horizontal([Constraint::Length(2), Constraint::Min(1)]).areas(area);
        self.render_marker(marker, buf, focused);
        input.render(
            field,
            buf,
            Style::default().fg(Color::White),
            Some((placeholder, Style::default().fg(Color::DarkGray))),
            focused,
        );
    }

    fn render_city(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.focus == Focus::City;
        let [marker, field] =
            Layout::horizontal([Constraint::Length(2), Constraint::Min(1)]).areas(area);
        self.render_marker(marker, buf, focused);

        let city = self.session.draft().city;
        let value_style = if city.is_selected() {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let line = Line::from(vec![
            Span::styled("‹ ", Style::default().fg(Color::Cyan)),
            Span::styled(city.label(), value_style),
            Span::styled(" ›", Style::default().fg(Color::Cyan)),
        ]);
        Paragraph::new(line)
            .style(focus_style(focused))
            .render(field, buf);
    }

    fn render_gender(&self, area: Rect, buf: &mut Buffer) {
        let gender = self.session.draft().gender;
        let checkbox = |checked: bool, label: &str, focus: Focus| {
            let mark = if checked { "[x] " } else { "[ ] " };
            Span::styled(format!("{mark}{label}"), focus_style(self.focus == focus))
        };

        let focused = matches!(self.focus, Focus::Male | Focus::Female);
        let [marker, field] =
            Layout::horizontal([Constraint::Length(2), Constraint::Min(1)]).areas(area);
        self.render_marker(marker, buf, focused);

        let line = Line::from(vec![
            checkbox(gender.male, "Male", Focus::Male),
            Span::raw("   "),
            checkbox(gender.female, "Female", Focus::Female),
        ]);
        Paragraph::new(line).render(field, buf);
    }

    fn render_save(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.focus == Focus::Save;
        let label = if self.session.is_editing() {
            "[ Update ]"
        } else {
            "[ Save ]"
        };
        let style = if focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let [marker, field] =
            Layout::horizontal([Constraint::Length(2), Constraint::Min(1)]).areas(area);
        self.render_marker(marker, buf, focused);
        Paragraph::new(Span::styled(label, style)).render(field, buf);
    }

    fn render_marker(&self, area: Rect, buf: &mut Buffer, focused: bool) {
        if focused {
            Paragraph::new(Span::styled("›", Style::default().fg(Color::Cyan))).render(area, buf);
        }
    }
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    }
}
