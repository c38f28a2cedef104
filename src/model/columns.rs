use super::task::{Task, TaskStatus};

/// Three ordered task lists, one per status.
///
/// Every task sits in exactly one list, and that list is the one matching
/// `task.status`. All mutation goes through methods that keep this true.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnStore {
    columns: [Vec<Task>; 3],
}

impl ColumnStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board the app starts with when no tasks exist yet
    pub fn sample() -> Self {
        let mut store = Self::new();
        for task in [
            Task::new(TaskStatus::ToDo, "Buy oats", "organic oats"),
            Task::new(TaskStatus::ToDo, "Buy mate", "tony mate"),
            Task::new(TaskStatus::ToDo, "do laundry", "30 degrees C and dry outdoors"),
            Task::new(TaskStatus::InProgress, "learn TUI", "widgets, layout and events"),
            Task::new(TaskStatus::Done, "Install toolchain", "rustup, cargo, editor"),
        ] {
            store.push(task);
        }
        store
    }

    /// Tasks in one column, in display order
    pub fn column(&self, status: TaskStatus) -> &[Task] {
        &self.columns[status.index()]
    }

    pub fn get(&self, status: TaskStatus, index: usize) -> Option<&Task> {
        self.columns[status.index()].get(index)
    }

    pub fn len(&self, status: TaskStatus) -> usize {
        self.columns[status.index()].len()
    }

    /// Number of tasks across all columns
    pub fn total(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// All tasks with the column they are stored in
    pub fn iter(&self) -> impl Iterator<Item = (TaskStatus, &Task)> + '_ {
        TaskStatus::columns()
            .iter()
            .flat_map(move |&status| self.column(status).iter().map(move |task| (status, task)))
    }

    /// Insert a task into `status` at `position`, appending when the position
    /// is past the end. The task's status is set to `status`.
    pub fn insert(&mut self, status: TaskStatus, mut task: Task, position: usize) {
        task.status = status;
        let column = &mut self.columns[status.index()];
        let position = position.min(column.len());
        column.insert(position, task);
    }

    /// Append a task to the end of the column matching its status
    pub fn push(&mut self, task: Task) {
        self.columns[task.status.index()].push(task);
    }

    /// Remove and return the task at `index`, or `None` if out of range
    pub fn remove_at(&mut self, status: TaskStatus, index: usize) -> Option<Task> {
        let column = &mut self.columns[status.index()];
        if index < column.len() {
            Some(column.remove(index))
        } else {
            None
        }
    }

    /// Move a task one column to the right (Done wraps to ToDo), appending it
    /// to the destination. Returns the destination column.
    pub fn move_forward(&mut self, status: TaskStatus, index: usize) -> Option<TaskStatus> {
        self.relocate(status, index, status.next())
    }

    /// Move a task one column to the left (ToDo wraps to Done), appending it
    /// to the destination. Returns the destination column.
    pub fn move_backward(&mut self, status: TaskStatus, index: usize) -> Option<TaskStatus> {
        self.relocate(status, index, status.previous())
    }

    fn relocate(&mut self, from: TaskStatus, index: usize, to: TaskStatus) -> Option<TaskStatus> {
        let mut task = self.remove_at(from, index)?;
        task.status = to;
        self.push(task);
        Some(to)
    }

    /// Check the membership invariant. Used by tests and debug assertions.
    pub fn is_consistent(&self) -> bool {
        self.iter().all(|(status, task)| task.status == status)
    }
}
