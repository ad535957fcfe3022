use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Identifier handed out by the task store. Backed by a monotonic counter, so
/// ids are never reassigned or reused after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
        }
    }

    /// Human-facing label shown on status buttons.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Done => "Done",
        }
    }

    /// One step of the fixed rotation Pending -> InProgress -> Done -> Pending.
    pub fn next(self) -> Self {
        match self {
            TaskStatus::Pending => TaskStatus::InProgress,
            TaskStatus::InProgress => TaskStatus::Done,
            TaskStatus::Done => TaskStatus::Pending,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, TaskStatus::Done)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl ValueEnum for TaskStatus {
    fn value_variants<'a>() -> &'a [Self] {
        &Self::ALL
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub category: String,
    pub responsible: String,
    pub status: TaskStatus,
}

/// The mutable part of a task: what a create-commit inserts and an
/// edit-commit replaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    pub name: String,
    pub status: TaskStatus,
    pub category: String,
    pub responsible: String,
}

impl TaskFields {
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            name: self.name,
            category: self.category,
            responsible: self.responsible,
            status: self.status,
        }
    }
}

impl From<&Task> for TaskFields {
    fn from(task: &Task) -> Self {
        Self {
            name: task.name.clone(),
            status: task.status,
            category: task.category.clone(),
            responsible: task.responsible.clone(),
        }
    }
}

/// Dashboard counters, always derived from the current task list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoardStats {
    pub total: usize,
    pub done: usize,
    pub pending: usize,
    pub progress: f64,
}

impl BoardStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let done = tasks.iter().filter(|task| task.status.is_done()).count();
        let progress = if total == 0 {
            0.0
        } else {
            done as f64 / total as f64
        };
        Self {
            total,
            done,
            pending: total - done,
            progress,
        }
    }

    pub fn progress_percent(&self) -> u16 {
        (self.progress * 100.0).round() as u16
    }
}
