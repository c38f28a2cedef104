mod columns;
mod task;

pub use columns::ColumnStore;
pub use task::{Task, TaskStatus};
