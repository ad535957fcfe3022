use std::time::Instant;

use anyhow::{Context, Result};
use ratatui::style::{Color, Style};
use ratatui::widgets::TableState;

use super::buffer::TextBuffer;
use super::constants::*;
use super::form::{FormAction, FormCursor, FormRow};
use crate::config::AppConfig;
use crate::core::seeding::seed_sample_tasks;
use crate::core::{Board, DraftField, Intent, Outcome, OverlayState, RemoteSignal};
use crate::model::{TaskId, TaskStatus};

mod input;
mod render;
#[cfg(test)]
mod tests;

/// What the remote is pointing at while the dashboard is interactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DashboardFocus {
    NewTask,
    ClearCompleted,
    Card(usize),
    Status(usize),
}

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    kind: StatusKind,
    created_at: Instant,
}

impl StatusMessage {
    fn new<T: Into<String>>(text: T, kind: StatusKind) -> Self {
        Self {
            text: text.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    fn style(&self) -> Style {
        match self.kind {
            StatusKind::Info => Style::default().fg(Color::Cyan),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum StatusKind {
    Info,
    Error,
}

pub(crate) struct App {
    config: AppConfig,
    board: Board,
    focus: DashboardFocus,
    table_state: TableState,
    form: FormCursor,
    name_input: TextBuffer,
    category_input: TextBuffer,
    responsible_input: TextBuffer,
    status: Option<StatusMessage>,
    should_quit: bool,
}

impl App {
    pub(crate) fn new(config: AppConfig, demo: bool) -> Result<Self> {
        let board = Board::new(config.settings()).context("failed to build board")?;
        let mut app = Self {
            config,
            board,
            focus: DashboardFocus::NewTask,
            table_state: TableState::default(),
            form: FormCursor::default(),
            name_input: TextBuffer::new(),
            category_input: TextBuffer::new(),
            responsible_input: TextBuffer::new(),
            status: None,
            should_quit: false,
        };

        if demo {
            let seeded = seed_sample_tasks(&mut app.board)?;
            if seeded > 0 {
                app.focus = DashboardFocus::Card(0);
                app.set_status_info(STATUS_DEMO_SEEDED);
            }
        }
        app.clamp_focus();
        Ok(app)
    }

    pub(crate) fn on_tick(&mut self) {
        if let Some(status) = &self.status {
            if status.created_at.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
    }

    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn is_editing(&self) -> bool {
        matches!(self.board.overlay_state(), OverlayState::EditOpen(_))
    }

    fn task_id_at(&self, index: usize) -> Option<TaskId> {
        self.board.tasks().get(index).map(|task| task.id)
    }

    /// Send one intent to the board and reflect the outcome on screen.
    fn dispatch(&mut self, intent: Intent) -> Result<Outcome> {
        let outcome = self.board.apply(intent)?;
        self.after_outcome(&outcome);
        Ok(outcome)
    }

    fn remote(&mut self, signal: RemoteSignal) -> Result<Outcome> {
        let outcome = self.board.handle_remote(signal)?;
        self.after_outcome(&outcome);
        Ok(outcome)
    }

    fn after_outcome(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Opened(_) => {
                self.form = FormCursor::default();
                self.status = None;
            }
            Outcome::Created(_) => {
                self.focus = DashboardFocus::Card(0);
                self.set_status_info(outcome.to_string());
            }
            Outcome::Cleared(0) => self.set_status_info(STATUS_NOTHING_TO_CLEAR),
            Outcome::Updated(_)
            | Outcome::Deleted(_)
            | Outcome::StatusChanged(_, _)
            | Outcome::Cleared(_)
            | Outcome::Registered(_)
            | Outcome::ForcedClose(_) => self.set_status_info(outcome.to_string()),
            Outcome::Rejected(message) => self.set_status_error(message.clone()),
            Outcome::Closed => self.status = None,
            Outcome::FieldSet | Outcome::Ignored => {}
        }
        tracing::debug!(outcome = %outcome, "board updated");
        self.sync_inputs();
        self.clamp_focus();
    }

    /// Mirror the draft's text fields into the editable buffers.
    fn sync_inputs(&mut self) {
        match self.board.draft() {
            Some(draft) => {
                self.name_input.sync(&draft.name);
                self.category_input.sync(&draft.pending_category);
                self.responsible_input.sync(&draft.pending_responsible);
            }
            None => {
                self.name_input.clear();
                self.category_input.clear();
                self.responsible_input.clear();
            }
        }
    }

    fn clamp_focus(&mut self) {
        let len = self.board.tasks().len();
        self.focus = match self.focus {
            DashboardFocus::Card(_) | DashboardFocus::Status(_) if len == 0 => {
                DashboardFocus::NewTask
            }
            DashboardFocus::Card(i) if i >= len => DashboardFocus::Card(len - 1),
            DashboardFocus::Status(i) if i >= len => DashboardFocus::Status(len - 1),
            other => other,
        };
        match self.focus {
            DashboardFocus::Card(i) | DashboardFocus::Status(i) => self.table_state.select(Some(i)),
            _ => self.table_state.select(None),
        }
    }

    fn buffer(&self, row: FormRow) -> Option<&TextBuffer> {
        match row {
            FormRow::Name => Some(&self.name_input),
            FormRow::NewCategory => Some(&self.category_input),
            FormRow::NewResponsible => Some(&self.responsible_input),
            _ => None,
        }
    }

    fn buffer_mut(&mut self, row: FormRow) -> Option<&mut TextBuffer> {
        match row {
            FormRow::Name => Some(&mut self.name_input),
            FormRow::NewCategory => Some(&mut self.category_input),
            FormRow::NewResponsible => Some(&mut self.responsible_input),
            _ => None,
        }
    }

    /// Number of focusable chips or buttons on a form row.
    fn row_len(&self, row: FormRow) -> usize {
        match row {
            FormRow::Status => TaskStatus::ALL.len(),
            FormRow::Category => self.board.categories().len(),
            FormRow::Responsible => self.board.responsibles().len(),
            FormRow::Actions => FormAction::available(self.is_editing()).len(),
            FormRow::Name | FormRow::NewCategory | FormRow::NewResponsible => 0,
        }
    }

    /// Column the cursor lands on when entering a row: the current choice.
    fn landing_column(&self, row: FormRow) -> usize {
        let draft = match self.board.draft() {
            Some(draft) => draft,
            None => return 0,
        };
        let position = match row {
            FormRow::Status => TaskStatus::ALL.iter().position(|s| *s == draft.status),
            FormRow::Category => self
                .board
                .categories()
                .iter()
                .position(|c| *c == draft.category),
            FormRow::Responsible => self
                .board
                .responsibles()
                .iter()
                .position(|r| *r == draft.responsible),
            FormRow::Actions => Some(self.row_len(row).saturating_sub(1)),
            _ => None,
        };
        position.unwrap_or(0)
    }

    fn text_field(row: FormRow, value: String) -> Option<DraftField> {
        match row {
            FormRow::Name => Some(DraftField::Name(value)),
            FormRow::NewCategory => Some(DraftField::PendingCategory(value)),
            FormRow::NewResponsible => Some(DraftField::PendingResponsible(value)),
            _ => None,
        }
    }

    pub(crate) fn set_status_info<T: Into<String>>(&mut self, message: T) {
        self.status = Some(StatusMessage::new(message, StatusKind::Info));
    }

    pub(crate) fn set_status_error<T: Into<String>>(&mut self, message: T) {
        let mut text = String::from("⚠️  ");
        text.push_str(&message.into());
        self.status = Some(StatusMessage::new(text, StatusKind::Error));
    }
}
