use dashmap::DashMap;
use log::debug;

use crate::error::AppError;
use crate::models::{Identity, Task, TaskInput};

/// Per-user task lists.
///
/// Each list sits in one `DashMap` shard: operations on the same user are
/// serialized by that shard's lock, other users' lists are not blocked.
#[derive(Default)]
pub struct TaskStore {
    lists: DashMap<String, Vec<Task>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new task to the end of the owner's list.
    pub fn add(&self, owner: &Identity, input: TaskInput) -> Task {
        let task = Task::new(input);
        self.lists
            .entry(owner.username().to_owned())
            .or_default()
            .push(task.clone());
        debug!("added task {} for {}", task.id, owner);
        task
    }

    /// Returns the owner's tasks in insertion order.
    pub fn list(&self, owner: &Identity) -> Result<Vec<Task>, AppError> {
        match self.lists.get(owner.username()) {
            Some(tasks) if !tasks.is_empty() => Ok(tasks.clone()),
            _ => Err(AppError::NotFound("Todolist not found!".into())),
        }
    }

    /// Empties the owner's list. Safe to call when there is nothing to clear.
    pub fn clear(&self, owner: &Identity) {
        self.lists.insert(owner.username().to_owned(), Vec::new());
        debug!("cleared tasks for {}", owner);
    }
}
