//! Single entry point owning the task store, both registries and the overlay.
//!
//! Every intent is applied to completion before the next one is accepted, and
//! the stale-edit guard runs after each of them.

use std::fmt;

use serde::Serialize;

use crate::config::BoardSettings;
use crate::draft::FormDraft;
use crate::error::BoardError;
use crate::intent::{Intent, RemoteSignal};
use crate::model::{BoardStats, Task, TaskId, TaskStatus};
use crate::overlay::{Commit, OverlayController, OverlayState};
use crate::registry::{Registries, Registry, RegistryKind};
use crate::store::TaskStore;

/// What a single intent did to the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum Outcome {
    Opened(OverlayState),
    Closed,
    Created(TaskId),
    Updated(TaskId),
    Deleted(TaskId),
    StatusChanged(TaskId, TaskStatus),
    Cleared(usize),
    Registered(String),
    FieldSet,
    /// Commit refused; the message is also on the draft.
    Rejected(String),
    /// The edit overlay lost its task and was closed.
    ForcedClose(TaskId),
    /// Safe no-op.
    Ignored,
}

impl Outcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Outcome::Ignored)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Opened(OverlayState::EditOpen(id)) => write!(f, "editing task #{id}"),
            Outcome::Opened(_) => write!(f, "new task form opened"),
            Outcome::Closed => write!(f, "form closed"),
            Outcome::Created(id) => write!(f, "created task #{id}"),
            Outcome::Updated(id) => write!(f, "updated task #{id}"),
            Outcome::Deleted(id) => write!(f, "deleted task #{id}"),
            Outcome::StatusChanged(id, status) => write!(f, "task #{id} is now {status}"),
            Outcome::Cleared(count) => write!(
                f,
                "cleared {} completed task{}",
                count,
                if *count == 1 { "" } else { "s" }
            ),
            Outcome::Registered(value) => write!(f, "selected '{value}'"),
            Outcome::FieldSet => write!(f, "field updated"),
            Outcome::Rejected(message) => write!(f, "rejected: {message}"),
            Outcome::ForcedClose(id) => write!(f, "task #{id} vanished, form closed"),
            Outcome::Ignored => write!(f, "ignored"),
        }
    }
}

/// Serialisable aggregate of every read model.
#[derive(Debug, Clone, Serialize)]
pub struct BoardSnapshot {
    pub tasks: Vec<Task>,
    pub categories: Vec<String>,
    pub responsibles: Vec<String>,
    pub overlay: OverlayState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<FormDraft>,
    pub stats: BoardStats,
}

#[derive(Debug, Clone)]
pub struct Board {
    store: TaskStore,
    registries: Registries,
    overlay: OverlayController,
    placeholder_prefix: String,
}

impl Board {
    pub fn new(settings: &BoardSettings) -> Result<Self, BoardError> {
        let registries = Registries::new(
            Registry::seeded(RegistryKind::Category, &settings.categories)?,
            Registry::seeded(RegistryKind::Responsible, &settings.responsibles)?,
        );
        Ok(Self {
            store: TaskStore::new(),
            registries,
            overlay: OverlayController::new(),
            placeholder_prefix: settings.placeholder_prefix.clone(),
        })
    }

    /// Process one intent. Only invariant violations surface as errors.
    ///
    /// When the intent itself removed the task under edit (for example a
    /// `ClearCompleted` that swept it), the intent's own outcome is returned
    /// and the overlay guard only logs the close. `ForcedClose` replaces the
    /// outcome only when the intent did nothing else.
    pub fn apply(&mut self, intent: Intent) -> Result<Outcome, BoardError> {
        let name = intent.name();
        let outcome = match self.dispatch(intent) {
            Ok(outcome) => outcome,
            Err(BoardError::Validation(message)) => Outcome::Rejected(message),
            Err(BoardError::StaleReference(id)) => Outcome::ForcedClose(id),
            Err(err @ BoardError::EmptyRegistry(_)) => {
                tracing::error!(intent = name, error = %err, "board invariant violated");
                return Err(err);
            }
        };

        let outcome = match self.overlay.guard_stale(&self.store) {
            Some(id) if outcome.is_ignored() => Outcome::ForcedClose(id),
            _ => outcome,
        };
        tracing::debug!(intent = name, outcome = %outcome, "intent applied");
        Ok(outcome)
    }

    /// Route a global remote button, honouring the overlay gate.
    pub fn handle_remote(&mut self, signal: RemoteSignal) -> Result<Outcome, BoardError> {
        self.apply(Intent::Remote { signal })
    }

    fn dispatch(&mut self, intent: Intent) -> Result<Outcome, BoardError> {
        let outcome = match intent {
            Intent::OpenCreate => {
                if self.overlay.open_create(&self.registries)? {
                    Outcome::Opened(OverlayState::CreateOpen)
                } else {
                    Outcome::Ignored
                }
            }
            Intent::OpenEdit { id } => {
                if self.overlay.open_edit(id, &self.store) {
                    Outcome::Opened(OverlayState::EditOpen(id))
                } else {
                    Outcome::Ignored
                }
            }
            Intent::Cancel => {
                if self.overlay.cancel() {
                    Outcome::Closed
                } else {
                    Outcome::Ignored
                }
            }
            Intent::Commit => match self.overlay.commit(
                &mut self.store,
                &mut self.registries,
                &self.placeholder_prefix,
            )? {
                Some(Commit::Created(id)) => Outcome::Created(id),
                Some(Commit::Updated(id)) => Outcome::Updated(id),
                None => Outcome::Ignored,
            },
            Intent::Delete => match self.overlay.delete(&mut self.store) {
                Some(id) => Outcome::Deleted(id),
                None => Outcome::Ignored,
            },
            Intent::CycleStatus { id } => match self.store.cycle_status(id) {
                Some(status) => Outcome::StatusChanged(id, status),
                None => Outcome::Ignored,
            },
            Intent::ClearCompleted => Outcome::Cleared(self.store.clear_completed()),
            Intent::SetField(field) => {
                if self.overlay.set_field(field, &self.registries) {
                    Outcome::FieldSet
                } else {
                    Outcome::Ignored
                }
            }
            Intent::AddPendingCategory => self.add_pending(RegistryKind::Category),
            Intent::AddPendingResponsible => self.add_pending(RegistryKind::Responsible),
            Intent::Remote { signal } => self.route_remote(signal),
        };
        Ok(outcome)
    }

    fn route_remote(&mut self, signal: RemoteSignal) -> Outcome {
        match signal {
            RemoteSignal::PlayPause => {
                if self.overlay.is_open() {
                    Outcome::Ignored
                } else {
                    Outcome::Cleared(self.store.clear_completed())
                }
            }
            RemoteSignal::Menu | RemoteSignal::Back => {
                if self.overlay.cancel() {
                    Outcome::Closed
                } else {
                    Outcome::Ignored
                }
            }
        }
    }

    fn add_pending(&mut self, kind: RegistryKind) -> Outcome {
        match self.overlay.add_pending_now(kind, &mut self.registries) {
            Some(resolution) => Outcome::Registered(resolution.value),
            None => Outcome::Ignored,
        }
    }

    /// Whether the dashboard behind the overlay should accept input.
    pub fn is_dashboard_interactive(&self) -> bool {
        !self.overlay.is_open()
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.store.get(id)
    }

    pub fn categories(&self) -> &[String] {
        self.registries.categories().entries()
    }

    pub fn responsibles(&self) -> &[String] {
        self.registries.responsibles().entries()
    }

    pub fn registry(&self, kind: RegistryKind) -> &Registry {
        self.registries.get(kind)
    }

    pub fn overlay_state(&self) -> OverlayState {
        self.overlay.state()
    }

    pub fn draft(&self) -> Option<&FormDraft> {
        self.overlay.draft()
    }

    pub fn stats(&self) -> BoardStats {
        self.store.stats()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            tasks: self.tasks().to_vec(),
            categories: self.categories().to_vec(),
            responsibles: self.responsibles().to_vec(),
            overlay: self.overlay_state(),
            draft: self.draft().cloned(),
            stats: self.stats(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::DraftField;
    use crate::error::VALIDATION_MESSAGE;
    use pretty_assertions::assert_eq;

    fn board_with(categories: &[&str], responsibles: &[&str]) -> Board {
        let settings = BoardSettings {
            categories: categories.iter().map(|s| s.to_string()).collect(),
            responsibles: responsibles.iter().map(|s| s.to_string()).collect(),
            ..BoardSettings::default()
        };
        Board::new(&settings).unwrap()
    }

    fn create(board: &mut Board, name: &str) -> TaskId {
        board.apply(Intent::OpenCreate).unwrap();
        board
            .apply(Intent::SetField(DraftField::Name(name.into())))
            .unwrap();
        match board.apply(Intent::Commit).unwrap() {
            Outcome::Created(id) => id,
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn blank_name_scenario_registers_new_responsible() {
        let mut board = board_with(&["Work"], &["Team"]);
        board.apply(Intent::OpenCreate).unwrap();
        board
            .apply(Intent::SetField(DraftField::Name(String::new())))
            .unwrap();
        board
            .apply(Intent::SetField(DraftField::Category("Work".into())))
            .unwrap();
        board
            .apply(Intent::SetField(DraftField::PendingResponsible("Ana ".into())))
            .unwrap();

        let outcome = board.apply(Intent::Commit).unwrap();
        assert_eq!(outcome, Outcome::Created(TaskId::new(1)));

        let task = &board.tasks()[0];
        assert_eq!(task.name, "Task 1");
        assert_eq!(task.category, "Work");
        assert_eq!(task.responsible, "Ana");
        assert_eq!(board.responsibles().to_vec(), vec!["Team", "Ana"]);
        assert_eq!(board.overlay_state(), OverlayState::Closed);
    }

    #[test]
    fn commit_without_category_keeps_overlay_open() {
        let mut board = board_with(&["Work"], &["Team"]);
        create(&mut board, "existing");
        board.apply(Intent::OpenCreate).unwrap();
        board
            .apply(Intent::SetField(DraftField::Category(String::new())))
            .unwrap();

        let outcome = board.apply(Intent::Commit).unwrap();
        assert_eq!(outcome, Outcome::Rejected(VALIDATION_MESSAGE.into()));
        assert_eq!(board.overlay_state(), OverlayState::CreateOpen);
        assert!(board
            .draft()
            .and_then(|draft| draft.error.as_ref())
            .is_some());
        assert_eq!(board.tasks().len(), 1);
    }

    #[test]
    fn open_edit_on_deleted_task_stays_closed() {
        let mut board = board_with(&["Work"], &["Team"]);
        let id = create(&mut board, "short lived");
        board.apply(Intent::OpenEdit { id }).unwrap();
        board.apply(Intent::Delete).unwrap();

        let outcome = board.apply(Intent::OpenEdit { id }).unwrap();
        assert_eq!(outcome, Outcome::Ignored);
        assert_eq!(board.overlay_state(), OverlayState::Closed);
    }

    #[test]
    fn clear_completed_force_closes_edit_on_done_task() {
        let mut board = board_with(&["Work"], &["Team"]);
        let id = create(&mut board, "finish me");
        board.apply(Intent::CycleStatus { id }).unwrap();
        board.apply(Intent::CycleStatus { id }).unwrap();
        board.apply(Intent::OpenEdit { id }).unwrap();

        let outcome = board.apply(Intent::ClearCompleted).unwrap();
        assert_eq!(outcome, Outcome::Cleared(1));
        assert_eq!(board.overlay_state(), OverlayState::Closed);
        assert!(board.draft().is_none());
    }

    #[test]
    fn reopening_after_rejected_session_starts_fresh() {
        let mut board = board_with(&["Work", "Home"], &["Team", "Ana"]);
        board.apply(Intent::OpenCreate).unwrap();
        board
            .apply(Intent::SetField(DraftField::Category(String::new())))
            .unwrap();
        board
            .apply(Intent::SetField(DraftField::PendingResponsible("Bia".into())))
            .unwrap();
        assert_eq!(
            board.apply(Intent::Commit).unwrap(),
            Outcome::Rejected(VALIDATION_MESSAGE.into())
        );
        assert_eq!(board.apply(Intent::Cancel).unwrap(), Outcome::Closed);

        board.apply(Intent::OpenCreate).unwrap();
        let draft = board.draft().cloned().unwrap();
        assert!(draft.error.is_none());
        assert_eq!(draft.pending_category, "");
        assert_eq!(draft.pending_responsible, "");
        assert_eq!(draft.category, "Work");
        assert_eq!(draft.responsible, "Team");
        assert_eq!(board.responsibles().to_vec(), vec!["Team", "Ana"]);
    }

    #[test]
    fn rejected_edit_commit_keeps_form_and_task() {
        let mut board = board_with(&["Work", "Home"], &["Team"]);
        let id = create(&mut board, "keep me");
        let before = board.task(id).cloned().unwrap();
        let categories = board.categories().len();

        board.apply(Intent::OpenEdit { id }).unwrap();
        board
            .apply(Intent::SetField(DraftField::Responsible(String::new())))
            .unwrap();
        board
            .apply(Intent::SetField(DraftField::PendingCategory("Errands".into())))
            .unwrap();

        let outcome = board.apply(Intent::Commit).unwrap();
        assert_eq!(outcome, Outcome::Rejected(VALIDATION_MESSAGE.into()));
        assert_eq!(board.overlay_state(), OverlayState::EditOpen(id));
        assert_eq!(board.categories().len(), categories);
        assert_eq!(board.task(id), Some(&before));
        assert_eq!(
            board.draft().map(|draft| draft.pending_category.as_str()),
            Some("Errands")
        );
    }

    #[test]
    fn remote_signals_respect_overlay_gate() {
        let mut board = board_with(&["Work"], &["Team"]);
        let id = create(&mut board, "done already");
        board.apply(Intent::CycleStatus { id }).unwrap();
        board.apply(Intent::CycleStatus { id }).unwrap();

        board.apply(Intent::OpenCreate).unwrap();
        assert_eq!(
            board.handle_remote(RemoteSignal::PlayPause).unwrap(),
            Outcome::Ignored
        );
        assert_eq!(board.tasks().len(), 1);

        assert_eq!(
            board.handle_remote(RemoteSignal::Back).unwrap(),
            Outcome::Closed
        );
        assert_eq!(
            board.handle_remote(RemoteSignal::Menu).unwrap(),
            Outcome::Ignored
        );
        assert_eq!(
            board.handle_remote(RemoteSignal::PlayPause).unwrap(),
            Outcome::Cleared(1)
        );
        assert!(board.tasks().is_empty());
    }

    #[test]
    fn cycle_status_while_overlay_open_leaves_draft_alone() {
        let mut board = board_with(&["Work"], &["Team"]);
        let id = create(&mut board, "row");
        board.apply(Intent::OpenEdit { id }).unwrap();
        assert!(!board.is_dashboard_interactive());

        let outcome = board.apply(Intent::CycleStatus { id }).unwrap();
        assert_eq!(outcome, Outcome::StatusChanged(id, TaskStatus::InProgress));
        assert_eq!(board.draft().unwrap().status, TaskStatus::Pending);

        board.apply(Intent::Commit).unwrap();
        assert_eq!(board.task(id).unwrap().status, TaskStatus::Pending);
        assert!(board.is_dashboard_interactive());
    }

    #[test]
    fn placeholder_uses_creation_counter_not_id() {
        let mut board = board_with(&["Work"], &["Team"]);
        let first = create(&mut board, "first");
        create(&mut board, "second");
        board.apply(Intent::OpenEdit { id: first }).unwrap();
        board
            .apply(Intent::SetField(DraftField::Name("  ".into())))
            .unwrap();
        board.apply(Intent::Commit).unwrap();
        assert_eq!(board.task(first).unwrap().name, "Task 3");
    }

    #[test]
    fn intents_on_closed_overlay_are_no_ops() {
        let mut board = board_with(&["Work"], &["Team"]);
        for intent in [
            Intent::Cancel,
            Intent::Commit,
            Intent::Delete,
            Intent::AddPendingCategory,
            Intent::SetField(DraftField::Name("x".into())),
            Intent::CycleStatus { id: TaskId::new(8) },
        ] {
            assert_eq!(board.apply(intent).unwrap(), Outcome::Ignored);
        }
        assert!(board.tasks().is_empty());
    }

    #[test]
    fn snapshot_reflects_current_state() {
        let mut board = board_with(&["Work"], &["Team"]);
        create(&mut board, "snap");
        board.apply(Intent::OpenCreate).unwrap();

        let snapshot = board.snapshot();
        assert_eq!(snapshot.tasks.len(), 1);
        assert_eq!(snapshot.overlay, OverlayState::CreateOpen);
        assert!(snapshot.draft.is_some());
        assert_eq!(snapshot.stats.total, 1);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["overlay"]["state"], "create_open");
        assert_eq!(json["tasks"][0]["status"], "pending");
    }
}
