use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{DraftField, Intent, Outcome, RemoteSignal};
use crate::model::TaskStatus;
use crate::tui::buffer::TextBuffer;
use crate::tui::constants::STATUS_EMPTY_TAG;
use crate::tui::form::{FormAction, FormRow};

use super::{App, DashboardFocus};

/// Remote-control buttons as the dashboard understands them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DashboardAction {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Select,
    NewTask,
    Remote(RemoteSignal),
}

impl DashboardAction {
    fn from_event(key: &KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Char('q') => Some(Self::Quit),
            KeyCode::Up | KeyCode::Char('k') => Some(Self::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Self::Down),
            KeyCode::Left | KeyCode::Char('h') => Some(Self::Left),
            KeyCode::Right | KeyCode::Char('l') => Some(Self::Right),
            KeyCode::Enter => Some(Self::Select),
            KeyCode::Char('n') => Some(Self::NewTask),
            KeyCode::Char('c') | KeyCode::Char(' ') => Some(Self::Remote(RemoteSignal::PlayPause)),
            KeyCode::Esc => Some(Self::Remote(RemoteSignal::Back)),
            KeyCode::Char('m') => Some(Self::Remote(RemoteSignal::Menu)),
            _ => None,
        }
    }
}

impl App {
    pub(crate) fn on_key(&mut self, key: KeyEvent) -> Result<()> {
        if matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        if self.board.is_dashboard_interactive() {
            self.handle_dashboard(key)
        } else {
            self.handle_form(key)
        }
    }

    fn handle_dashboard(&mut self, key: KeyEvent) -> Result<()> {
        let action = match DashboardAction::from_event(&key) {
            Some(action) => action,
            None => return Ok(()),
        };
        let has_tasks = !self.board.tasks().is_empty();

        match action {
            DashboardAction::Quit => self.should_quit = true,
            DashboardAction::Up => {
                self.focus = match self.focus {
                    DashboardFocus::Card(0) => DashboardFocus::NewTask,
                    DashboardFocus::Status(0) => DashboardFocus::ClearCompleted,
                    DashboardFocus::Card(i) => DashboardFocus::Card(i - 1),
                    DashboardFocus::Status(i) => DashboardFocus::Status(i - 1),
                    other => other,
                };
            }
            DashboardAction::Down => {
                self.focus = match self.focus {
                    DashboardFocus::NewTask if has_tasks => DashboardFocus::Card(0),
                    DashboardFocus::ClearCompleted if has_tasks => DashboardFocus::Status(0),
                    DashboardFocus::Card(i) => DashboardFocus::Card(i + 1),
                    DashboardFocus::Status(i) => DashboardFocus::Status(i + 1),
                    other => other,
                };
            }
            DashboardAction::Left => {
                self.focus = match self.focus {
                    DashboardFocus::ClearCompleted => DashboardFocus::NewTask,
                    DashboardFocus::Status(i) => DashboardFocus::Card(i),
                    other => other,
                };
            }
            DashboardAction::Right => {
                self.focus = match self.focus {
                    DashboardFocus::NewTask => DashboardFocus::ClearCompleted,
                    DashboardFocus::Card(i) => DashboardFocus::Status(i),
                    other => other,
                };
            }
            DashboardAction::Select => self.activate_dashboard()?,
            DashboardAction::NewTask => {
                self.dispatch(Intent::OpenCreate)?;
            }
            DashboardAction::Remote(signal) => {
                self.remote(signal)?;
            }
        }
        self.clamp_focus();
        Ok(())
    }

    fn activate_dashboard(&mut self) -> Result<()> {
        match self.focus {
            DashboardFocus::NewTask => {
                self.dispatch(Intent::OpenCreate)?;
            }
            DashboardFocus::ClearCompleted => {
                self.dispatch(Intent::ClearCompleted)?;
            }
            DashboardFocus::Card(i) => {
                if let Some(id) = self.task_id_at(i) {
                    self.dispatch(Intent::OpenEdit { id })?;
                }
            }
            DashboardFocus::Status(i) => {
                if let Some(id) = self.task_id_at(i) {
                    self.dispatch(Intent::CycleStatus { id })?;
                }
            }
        }
        Ok(())
    }

    fn handle_form(&mut self, key: KeyEvent) -> Result<()> {
        let row = self.form.row;
        match key.code {
            KeyCode::Esc => {
                self.remote(RemoteSignal::Back)?;
            }
            KeyCode::Up | KeyCode::BackTab => self.move_form_row(false),
            KeyCode::Down | KeyCode::Tab => self.move_form_row(true),
            KeyCode::Left if row.is_text() => self.edit_text(|buffer| {
                buffer.move_left();
                false
            })?,
            KeyCode::Right if row.is_text() => self.edit_text(|buffer| {
                buffer.move_right();
                false
            })?,
            KeyCode::Home if row.is_text() => self.edit_text(|buffer| {
                buffer.move_home();
                false
            })?,
            KeyCode::End if row.is_text() => self.edit_text(|buffer| {
                buffer.move_end();
                false
            })?,
            KeyCode::Left => self.form.prev_column(),
            KeyCode::Right => {
                let len = self.row_len(row);
                self.form.next_column(len);
            }
            KeyCode::Backspace => self.edit_text(|buffer| buffer.backspace())?,
            KeyCode::Delete => self.edit_text(|buffer| buffer.delete_char())?,
            KeyCode::Enter => self.activate_form()?,
            KeyCode::Char(ch) if row.is_text() => self.edit_text(|buffer| {
                buffer.insert_char(ch);
                true
            })?,
            _ => {}
        }
        Ok(())
    }

    fn move_form_row(&mut self, forward: bool) {
        let moved = if forward {
            self.form.next_row()
        } else {
            self.form.prev_row()
        };
        if moved {
            self.form.column = self.landing_column(self.form.row);
        }
    }

    /// Apply `edit` to the focused text buffer and push the text to the draft
    /// when `edit` reports a change.
    fn edit_text<F>(&mut self, edit: F) -> Result<()>
    where
        F: FnOnce(&mut TextBuffer) -> bool,
    {
        let row = self.form.row;
        let value = match self.buffer_mut(row) {
            Some(buffer) => {
                if !edit(buffer) {
                    return Ok(());
                }
                buffer.as_str().to_string()
            }
            None => return Ok(()),
        };
        if let Some(field) = Self::text_field(row, value) {
            self.dispatch(Intent::SetField(field))?;
        }
        Ok(())
    }

    fn activate_form(&mut self) -> Result<()> {
        let row = self.form.row;
        let len = self.row_len(row);
        self.form.clamp(len);
        let column = self.form.column;

        match row {
            FormRow::Name => {
                self.move_form_row(true);
            }
            FormRow::Status => {
                if let Some(status) = TaskStatus::ALL.get(column) {
                    self.dispatch(Intent::SetField(DraftField::Status(*status)))?;
                }
            }
            FormRow::Category => {
                if let Some(value) = self.board.categories().get(column).cloned() {
                    self.dispatch(Intent::SetField(DraftField::Category(value)))?;
                }
            }
            FormRow::Responsible => {
                if let Some(value) = self.board.responsibles().get(column).cloned() {
                    self.dispatch(Intent::SetField(DraftField::Responsible(value)))?;
                }
            }
            FormRow::NewCategory => self.add_pending(Intent::AddPendingCategory)?,
            FormRow::NewResponsible => self.add_pending(Intent::AddPendingResponsible)?,
            FormRow::Actions => {
                let action = FormAction::available(self.is_editing()).get(column).copied();
                match action {
                    Some(FormAction::Delete) => {
                        self.dispatch(Intent::Delete)?;
                    }
                    Some(FormAction::Cancel) => {
                        self.dispatch(Intent::Cancel)?;
                    }
                    Some(FormAction::Save) => {
                        self.dispatch(Intent::Commit)?;
                    }
                    None => {}
                }
            }
        }
        Ok(())
    }

    fn add_pending(&mut self, intent: Intent) -> Result<()> {
        if let Outcome::Ignored = self.dispatch(intent)? {
            self.set_status_info(STATUS_EMPTY_TAG);
        }
        Ok(())
    }
}
