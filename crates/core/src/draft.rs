use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::model::{Task, TaskStatus};
use crate::registry::{Registries, RegistryKind};

/// Editable form state that only exists while the overlay is open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormDraft {
    pub name: String,
    pub status: TaskStatus,
    pub category: String,
    pub responsible: String,
    pub pending_category: String,
    pub pending_responsible: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FormDraft {
    /// Defaults for a new task: first registry entries, pending status.
    pub fn blank(registries: &Registries) -> Result<Self, BoardError> {
        Ok(Self {
            name: String::new(),
            status: TaskStatus::Pending,
            category: registries.categories().first()?.to_string(),
            responsible: registries.responsibles().first()?.to_string(),
            pending_category: String::new(),
            pending_responsible: String::new(),
            error: None,
        })
    }

    pub fn from_task(task: &Task) -> Self {
        Self {
            name: task.name.clone(),
            status: task.status,
            category: task.category.clone(),
            responsible: task.responsible.clone(),
            pending_category: String::new(),
            pending_responsible: String::new(),
            error: None,
        }
    }

    pub fn selected(&self, kind: RegistryKind) -> &str {
        match kind {
            RegistryKind::Category => &self.category,
            RegistryKind::Responsible => &self.responsible,
        }
    }

    pub fn pending(&self, kind: RegistryKind) -> &str {
        match kind {
            RegistryKind::Category => &self.pending_category,
            RegistryKind::Responsible => &self.pending_responsible,
        }
    }

    pub(crate) fn select(&mut self, kind: RegistryKind, value: String) {
        match kind {
            RegistryKind::Category => self.category = value,
            RegistryKind::Responsible => self.responsible = value,
        }
    }

    /// Split borrow of the selection and its pending-text buffer.
    pub(crate) fn tag_parts_mut(&mut self, kind: RegistryKind) -> (&str, &mut String) {
        match kind {
            RegistryKind::Category => (&self.category, &mut self.pending_category),
            RegistryKind::Responsible => (&self.responsible, &mut self.pending_responsible),
        }
    }

    /// Trimmed name, or `"<prefix> <counter>"` when left blank.
    pub fn resolved_name(&self, placeholder_prefix: &str, counter: u64) -> String {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            format!("{placeholder_prefix} {counter}")
        } else {
            trimmed.to_string()
        }
    }
}

/// A single field write coming from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum DraftField {
    Name(String),
    Status(TaskStatus),
    Category(String),
    Responsible(String),
    PendingCategory(String),
    PendingResponsible(String),
}

impl DraftField {
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Name(_) => "name",
            DraftField::Status(_) => "status",
            DraftField::Category(_) => "category",
            DraftField::Responsible(_) => "responsible",
            DraftField::PendingCategory(_) => "pending_category",
            DraftField::PendingResponsible(_) => "pending_responsible",
        }
    }
}
