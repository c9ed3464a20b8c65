use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Input structure for creating a task.
///
/// Clients send the text as `task`; `description` is accepted as well.
/// A body without either field is still a task, just an empty one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskInput {
    /// The text of the task.
    #[serde(default, alias = "description")]
    pub task: String,

    /// Whether the task starts out completed. Defaults to `false`.
    #[serde(default)]
    pub done: bool,
}

/// Represents a task entity as stored in a user's list and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for the task (UUID v4).
    pub id: Uuid,
    /// The text of the task.
    pub description: String,
    /// Completion flag.
    pub done: bool,
    /// Timestamp of when the task was added.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new `Task` from `TaskInput` with a fresh id and the current time.
    pub fn new(input: TaskInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: input.task,
            done: input.done,
            created_at: Utc::now(),
        }
    }
}
