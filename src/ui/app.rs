use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    Frame, Terminal,
};

use crate::config::Config;
use crate::data::RecordStore;
use crate::form::{EditMode, FormSession, SaveOutcome, TextField};
use crate::ui::components::{
    FormView, InputFilter, InstructionBar, RecordList, RecordListState, StatusLine,
    StatusMessage, TextInputState,
};
use crate::ui::events::Focus;
use crate::ui::terminal_guard::{install_panic_hook, TerminalGuard};

/// Width of the form pane
const FORM_WIDTH: u16 = 50;

/// Main application state
pub struct App {
    /// Application configuration
    config: Config,
    /// Saved records
    store: RecordStore,
    /// Draft, errors and edit mode
    session: FormSession,
    /// Cursor state for the name field
    name_input: TextInputState,
    /// Cursor state for the employee ID field
    employee_input: TextInputState,
    focus: Focus,
    list: RecordListState,
    status: Option<StatusMessage>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, store: RecordStore) -> Self {
        Self {
            config,
            store,
            session: FormSession::new(),
            name_input: TextInputState::new(),
            employee_input: TextInputState::with_filter(InputFilter::Digits),
            focus: Focus::Name,
            list: RecordListState::default(),
            status: None,
            should_quit: false,
        }
    }

    /// Build the app over the store named by the config
    pub fn from_config(config: Config) -> Self {
        let store = config.open_store();
        Self::new(config, store)
    }

    pub fn session(&self) -> &FormSession {
        &self.session
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the application main loop
    pub fn run(&mut self) -> anyhow::Result<()> {
        install_panic_hook();
        let mut guard = TerminalGuard::enter()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal);

        guard.cleanup()?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(self.config.tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('c') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('s') => {
                    self.save();
                    return;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Esc => self.cancel(),
            _ => match self.focus {
                Focus::Name | Focus::EmployeeId => self.handle_text_key(key),
                Focus::City => self.handle_city_key(key),
                Focus::Male | Focus::Female => self.handle_gender_key(key),
                Focus::Save => match key.code {
                    KeyCode::Enter | KeyCode::Char(' ') => self.save(),
                    KeyCode::Up => self.focus = self.focus.prev(),
                    KeyCode::Down => self.focus = self.focus.next(),
                    _ => {}
                },
                Focus::Records => self.handle_list_key(key),
            },
        }
    }

    fn handle_text_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let (field, input) = match self.focus {
            Focus::Name => (TextField::Name, &mut self.name_input),
            _ => (TextField::EmployeeId, &mut self.employee_input),
        };

        let changed = match key.code {
            KeyCode::Char('u') if ctrl => {
                input.delete_to_start();
                true
            }
            KeyCode::Char('w') if ctrl => {
                input.delete_word();
                true
            }
            KeyCode::Char(c) if !ctrl => input.insert_char(c),
            KeyCode::Backspace => {
                input.delete_char();
                true
            }
            KeyCode::Delete => {
                input.delete_forward();
                true
            }
            KeyCode::Left => {
                input.move_left();
                false
            }
            KeyCode::Right => {
                input.move_right();
                false
            }
            KeyCode::Home => {
                input.move_start();
                false
            }
            KeyCode::End => {
                input.move_end();
                false
            }
            KeyCode::Enter | KeyCode::Down => {
                self.focus = self.focus.next();
                false
            }
            KeyCode::Up => {
                self.focus = self.focus.prev();
                false
            }
            _ => false,
        };

        if changed {
            let value = input.value().to_string();
            self.session.update_field(field, value);
        }
    }

    fn handle_city_key(&mut self, key: KeyEvent) {
        let city = self.session.draft().city;
        match key.code {
            KeyCode::Right | KeyCode::Char(' ') => self.session.set_city(city.next()),
            KeyCode::Left => self.session.set_city(city.prev()),
            KeyCode::Enter | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::Up => self.focus = self.focus.prev(),
            _ => {}
        }
    }

    fn handle_gender_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(flag) = self.focus.gender_flag() {
                    self.session.toggle_gender(flag);
                }
            }
            KeyCode::Left | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Right | KeyCode::Down => self.focus = self.focus.next(),
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.list.select_next(self.store.len()),
            KeyCode::Up | KeyCode::Char('k') => self.list.select_prev(),
            KeyCode::Home => self.list.selected = 0,
            KeyCode::End => self.list.select_last(self.store.len()),
            KeyCode::Enter | KeyCode::Char('e') => self.edit_selected(),
            _ => {}
        }
    }

    fn save(&mut self) {
        match self.session.save(&mut self.store) {
            Ok(SaveOutcome::Invalid) => {
                let count = self.session.errors().len();
                self.status = Some(StatusMessage::error(format!(
                    "Not saved: {count} field(s) need attention"
                )));
                if let Some(field) = self.session.errors().fields().next() {
                    self.focus = Focus::for_field(field);
                }
                return;
            }
            Ok(SaveOutcome::Created(_)) => {
                self.list.select_last(self.store.len());
                self.status = Some(StatusMessage::info("Record saved"));
            }
            Ok(SaveOutcome::Updated(_)) => {
                self.status = Some(StatusMessage::info("Record updated"));
            }
            Ok(SaveOutcome::Unmatched(_)) => {
                self.status = Some(StatusMessage::error(
                    "The record being edited no longer exists",
                ));
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to persist records");
                self.status = Some(StatusMessage::error(format!("Saved in memory only: {e}")));
            }
        }

        self.sync_inputs();
        self.focus = Focus::Name;
    }

    fn edit_selected(&mut self) {
        let Some(record) = self.store.all().get(self.list.selected) else {
            return;
        };
        let (id, name) = (record.id, record.name.clone());

        if self.session.begin_edit_id(&self.store, id) {
            self.sync_inputs();
            self.focus = Focus::Name;
            self.status = Some(StatusMessage::info(format!("Editing {name}")));
        }
    }

    fn cancel(&mut self) {
        if self.session.is_editing() {
            self.session.cancel_edit();
            self.sync_inputs();
            self.focus = Focus::Name;
            self.status = Some(StatusMessage::info("Edit cancelled"));
        } else if self.focus == Focus::Records {
            self.focus = Focus::Name;
        }
    }

    /// Copy the session draft back into the text inputs
    fn sync_inputs(&mut self) {
        let draft = self.session.draft();
        self.name_input.set(&draft.name);
        self.employee_input.set(&draft.employee_id);
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let [header, body, status, hints] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(f.area());
        let [form_area, list_area] =
            Layout::horizontal([Constraint::Length(FORM_WIDTH), Constraint::Min(20)]).areas(body);

        let buf = f.buffer_mut();

        Paragraph::new(Line::from(Span::styled(
            "Employee Information Form",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(header, buf);

        FormView::new(
            &self.session,
            &self.name_input,
            &self.employee_input,
            self.focus,
        )
        .render(form_area, buf);

        let editing = match self.session.mode() {
            EditMode::Editing { id, .. } => Some(*id),
            EditMode::Creating => None,
        };
        RecordList::new(self.store.all(), editing, self.focus == Focus::Records).render(
            list_area,
            buf,
            &mut self.list,
        );

        StatusLine::new(self.status.as_ref()).render(status, buf);
        InstructionBar::new(self.key_hints()).render(hints, buf);
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints = vec![("Tab", "next")];
        match self.focus {
            Focus::City => hints.push(("←/→", "city")),
            Focus::Male | Focus::Female => hints.push(("Space", "toggle")),
            Focus::Records => hints.push(("Enter", "edit")),
            _ => {}
        }
        hints.push(("Ctrl+S", "save"));
        if self.session.is_editing() {
            hints.push(("Esc", "cancel edit"));
        }
        hints.push(("Ctrl+Q", "quit"));
        hints
    }
}
