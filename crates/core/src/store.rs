use crate::model::{BoardStats, Task, TaskFields, TaskId, TaskStatus};

/// Ordered task collection, most recently created first.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Current value of the creation counter, i.e. the id the next created
    /// task will receive.
    pub fn next_counter(&self) -> u64 {
        self.next_id
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn create(&mut self, fields: TaskFields) -> &Task {
        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        self.tasks.insert(0, fields.into_task(id));
        tracing::debug!(task_id = id.get(), "task created");
        &self.tasks[0]
    }

    /// Replace the mutable fields of `id` in place. Unknown ids are ignored.
    pub fn update(&mut self, id: TaskId, fields: TaskFields) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        *task = fields.into_task(id);
        true
    }

    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Drop every done task in one pass, keeping the order of the rest.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.status.is_done());
        let removed = before - self.tasks.len();
        tracing::debug!(removed, remaining = self.tasks.len(), "cleared completed tasks");
        removed
    }

    /// Advance `id` one step through the status rotation.
    pub fn cycle_status(&mut self, id: TaskId) -> Option<TaskStatus> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.status = task.status.next();
        Some(task.status)
    }

    pub fn stats(&self) -> BoardStats {
        BoardStats::from_tasks(&self.tasks)
    }
}
