//! Modal create/edit form lifecycle.
//!
//! The overlay is a sum type carrying its draft, so a draft cannot outlive an
//! open overlay and an edit overlay always names the task it edits.

use serde::Serialize;

use crate::draft::{DraftField, FormDraft};
use crate::error::{BoardError, VALIDATION_MESSAGE};
use crate::model::{TaskFields, TaskId};
use crate::registry::{Registries, RegistryKind};
use crate::resolver::{preview_tag, resolve_tag, TagResolution};
use crate::store::TaskStore;

/// Public view of the overlay, without the draft payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "task_id", rename_all = "snake_case")]
pub enum OverlayState {
    Closed,
    CreateOpen,
    EditOpen(TaskId),
}

impl OverlayState {
    pub fn is_open(&self) -> bool {
        !matches!(self, OverlayState::Closed)
    }
}

#[derive(Debug, Clone, Default)]
enum Overlay {
    #[default]
    Closed,
    Create(FormDraft),
    Edit {
        id: TaskId,
        draft: FormDraft,
    },
}

/// Result of a successful commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    Created(TaskId),
    Updated(TaskId),
}

#[derive(Debug, Clone, Default)]
pub struct OverlayController {
    overlay: Overlay,
}

impl OverlayController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> OverlayState {
        match &self.overlay {
            Overlay::Closed => OverlayState::Closed,
            Overlay::Create(_) => OverlayState::CreateOpen,
            Overlay::Edit { id, .. } => OverlayState::EditOpen(*id),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    pub fn draft(&self) -> Option<&FormDraft> {
        match &self.overlay {
            Overlay::Closed => None,
            Overlay::Create(draft) | Overlay::Edit { draft, .. } => Some(draft),
        }
    }

    fn draft_mut(&mut self) -> Option<&mut FormDraft> {
        match &mut self.overlay {
            Overlay::Closed => None,
            Overlay::Create(draft) | Overlay::Edit { draft, .. } => Some(draft),
        }
    }

    /// Open a blank create form. Ignored unless closed.
    pub fn open_create(&mut self, registries: &Registries) -> Result<bool, BoardError> {
        if self.is_open() {
            return Ok(false);
        }
        self.overlay = Overlay::Create(FormDraft::blank(registries)?);
        tracing::debug!("overlay opened for create");
        Ok(true)
    }

    /// Open an edit form on a snapshot of `id`. Ignored unless closed or if the
    /// task does not exist.
    pub fn open_edit(&mut self, id: TaskId, store: &TaskStore) -> bool {
        if self.is_open() {
            return false;
        }
        let Some(task) = store.get(id) else {
            tracing::debug!(task_id = id.get(), "edit requested for missing task");
            return false;
        };
        self.overlay = Overlay::Edit {
            id,
            draft: FormDraft::from_task(task),
        };
        tracing::debug!(task_id = id.get(), "overlay opened for edit");
        true
    }

    /// Discard the draft and close. Returns whether anything was open.
    pub fn cancel(&mut self) -> bool {
        let was_open = self.is_open();
        self.overlay = Overlay::Closed;
        was_open
    }

    /// Apply a field write to the open draft.
    ///
    /// Chip selections are canonicalised against the registry. An empty value
    /// clears the selection; an unregistered value is refused.
    pub fn set_field(&mut self, field: DraftField, registries: &Registries) -> bool {
        let Some(draft) = self.draft_mut() else {
            return false;
        };
        match field {
            DraftField::Name(value) => draft.name = value,
            DraftField::Status(status) => draft.status = status,
            DraftField::PendingCategory(value) => draft.pending_category = value,
            DraftField::PendingResponsible(value) => draft.pending_responsible = value,
            DraftField::Category(value) => {
                return select_chip(draft, RegistryKind::Category, &value, registries)
            }
            DraftField::Responsible(value) => {
                return select_chip(draft, RegistryKind::Responsible, &value, registries)
            }
        }
        true
    }

    /// Register the pending text for `kind` right away and select it.
    pub fn add_pending_now(
        &mut self,
        kind: RegistryKind,
        registries: &mut Registries,
    ) -> Option<TagResolution> {
        let draft = self.draft_mut()?;
        if draft.pending(kind).trim().is_empty() {
            return None;
        }
        let (selected, pending) = draft.tag_parts_mut(kind);
        let selected = selected.to_string();
        let resolution = resolve_tag(&selected, pending, registries.get_mut(kind));
        draft.select(kind, resolution.value.clone());
        Some(resolution)
    }

    /// Validate, resolve and write the draft into the store, then close.
    ///
    /// Validation runs before any registry or store mutation, so a rejected
    /// commit leaves both untouched and keeps the overlay open with the error
    /// recorded on the draft.
    pub fn commit(
        &mut self,
        store: &mut TaskStore,
        registries: &mut Registries,
        placeholder_prefix: &str,
    ) -> Result<Option<Commit>, BoardError> {
        if let Some(id) = self.stale_target(store) {
            self.overlay = Overlay::Closed;
            return Err(BoardError::StaleReference(id));
        }

        let counter = store.next_counter();
        let commit = match &mut self.overlay {
            Overlay::Closed => return Ok(None),
            Overlay::Create(draft) => {
                let fields = finalize(draft, registries, placeholder_prefix, counter)?;
                Commit::Created(store.create(fields).id)
            }
            Overlay::Edit { id, draft } => {
                let fields = finalize(draft, registries, placeholder_prefix, counter)?;
                store.update(*id, fields);
                Commit::Updated(*id)
            }
        };

        self.overlay = Overlay::Closed;
        tracing::debug!(?commit, "overlay committed");
        Ok(Some(commit))
    }

    /// Delete the task under edit and close. Only meaningful in edit mode.
    pub fn delete(&mut self, store: &mut TaskStore) -> Option<TaskId> {
        let Overlay::Edit { id, .. } = &self.overlay else {
            return None;
        };
        let id = *id;
        store.delete(id);
        self.overlay = Overlay::Closed;
        Some(id)
    }

    /// Force-close an edit overlay whose task has vanished.
    pub fn guard_stale(&mut self, store: &TaskStore) -> Option<TaskId> {
        let id = self.stale_target(store)?;
        self.overlay = Overlay::Closed;
        tracing::debug!(task_id = id.get(), "edit overlay closed after task removal");
        Some(id)
    }

    fn stale_target(&self, store: &TaskStore) -> Option<TaskId> {
        match &self.overlay {
            Overlay::Edit { id, .. } if !store.contains(*id) => Some(*id),
            _ => None,
        }
    }
}

fn select_chip(
    draft: &mut FormDraft,
    kind: RegistryKind,
    value: &str,
    registries: &Registries,
) -> bool {
    if value.is_empty() {
        draft.select(kind, String::new());
        return true;
    }
    match registries.get(kind).find(value) {
        Some(entry) => {
            draft.select(kind, entry.to_string());
            true
        }
        None => {
            tracing::debug!(registry = kind.as_str(), value, "ignoring unregistered chip");
            false
        }
    }
}

fn finalize(
    draft: &mut FormDraft,
    registries: &mut Registries,
    placeholder_prefix: &str,
    counter: u64,
) -> Result<TaskFields, BoardError> {
    let category_ok = preview_tag(
        &draft.category,
        &draft.pending_category,
        registries.categories(),
    )
    .is_some();
    let responsible_ok = preview_tag(
        &draft.responsible,
        &draft.pending_responsible,
        registries.responsibles(),
    )
    .is_some();
    if !category_ok || !responsible_ok {
        draft.error = Some(VALIDATION_MESSAGE.to_string());
        return Err(BoardError::Validation(VALIDATION_MESSAGE.to_string()));
    }

    let name = draft.resolved_name(placeholder_prefix, counter);
    let mut resolve = |kind: RegistryKind| {
        let (selected, pending) = draft.tag_parts_mut(kind);
        let selected = selected.to_string();
        resolve_tag(&selected, pending, registries.get_mut(kind)).value
    };
    let category = resolve(RegistryKind::Category);
    let responsible = resolve(RegistryKind::Responsible);

    Ok(TaskFields {
        name,
        status: draft.status,
        category,
        responsible,
    })
}
