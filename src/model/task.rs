use serde::{Deserialize, Serialize};

/// Column a task lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    ToDo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    /// The fixed column order of the board
    pub fn columns() -> &'static [TaskStatus] {
        &[TaskStatus::ToDo, TaskStatus::InProgress, TaskStatus::Done]
    }

    /// Position of this status in `columns()`
    pub fn index(&self) -> usize {
        match self {
            TaskStatus::ToDo => 0,
            TaskStatus::InProgress => 1,
            TaskStatus::Done => 2,
        }
    }

    /// Next column, wrapping Done back to ToDo
    pub fn next(&self) -> Self {
        match self {
            TaskStatus::ToDo => TaskStatus::InProgress,
            TaskStatus::InProgress => TaskStatus::Done,
            TaskStatus::Done => TaskStatus::ToDo,
        }
    }

    /// Previous column, wrapping ToDo back to Done
    pub fn previous(&self) -> Self {
        match self {
            TaskStatus::ToDo => TaskStatus::Done,
            TaskStatus::InProgress => TaskStatus::ToDo,
            TaskStatus::Done => TaskStatus::InProgress,
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::ToDo
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task on the kanban board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub status: TaskStatus,
    pub title: String,
    pub description: String,
}

impl Task {
    pub fn new(status: TaskStatus, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            status,
            title: title.into(),
            description: description.into(),
        }
    }

    /// A task is valid once its title has some non-whitespace text
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty()
    }
}
