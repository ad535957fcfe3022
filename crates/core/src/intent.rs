//! Typed intents the presentation layer sends into the board.

use serde::{Deserialize, Serialize};

use crate::draft::DraftField;
use crate::model::TaskId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    OpenCreate,
    OpenEdit { id: TaskId },
    Cancel,
    Commit,
    Delete,
    CycleStatus { id: TaskId },
    ClearCompleted,
    SetField(DraftField),
    AddPendingCategory,
    AddPendingResponsible,
    Remote { signal: RemoteSignal },
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Intent::OpenCreate => "open_create",
            Intent::OpenEdit { .. } => "open_edit",
            Intent::Cancel => "cancel",
            Intent::Commit => "commit",
            Intent::Delete => "delete",
            Intent::CycleStatus { .. } => "cycle_status",
            Intent::ClearCompleted => "clear_completed",
            Intent::SetField(_) => "set_field",
            Intent::AddPendingCategory => "add_pending_category",
            Intent::AddPendingResponsible => "add_pending_responsible",
            Intent::Remote { .. } => "remote",
        }
    }
}

/// Hardware buttons on the remote that act globally, independent of focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteSignal {
    /// Clears completed tasks while the dashboard is active.
    PlayPause,
    /// Dismisses the overlay.
    Menu,
    /// Dismisses the overlay.
    Back,
}
