//! Task collection - the ordered list every operation works on
//!
//! Tasks are addressed by their current 1-based position. Positions are
//! not stable: removing, sorting or loading renumbers the list, so callers
//! must look tasks up again afterwards.

use chrono::NaiveDate;
use std::path::Path;
use tracing::debug;

use crate::domain::{Priority, Task, TaskError};
use crate::repository::{FlatFileStore, TaskStore};

pub use sort::SortCriteria;

mod sort;

/// An ordered, exclusively owned list of tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCollection {
    tasks: Vec<Task>,
}

impl TaskCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Checks if there are no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All tasks in current order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task at a 1-based position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Task> {
        index.checked_sub(1).and_then(|i| self.tasks.get(i))
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut Task, TaskError> {
        let len = self.tasks.len();
        index
            .checked_sub(1)
            .and_then(|i| self.tasks.get_mut(i))
            .ok_or(TaskError::IndexOutOfRange { index, len })
    }

    /// Appends a task to the end of the list.
    pub fn add(&mut self, task: Task) {
        debug!(description = task.description(), position = self.tasks.len() + 1, "Adding task");
        self.tasks.push(task);
    }

    /// Iterates over `(1-based position, task)` pairs in current order.
    pub fn view(&self) -> impl Iterator<Item = (usize, &Task)> + '_ {
        self.tasks.iter().enumerate().map(|(i, task)| (i + 1, task))
    }

    /// Marks the task at a 1-based position complete.
    ///
    /// # Errors
    /// Returns `TaskError::IndexOutOfRange` if no task has that position.
    pub fn mark_complete(&mut self, index: usize) -> Result<&Task, TaskError> {
        let task = self.get_mut(index)?;
        task.mark_complete();
        debug!(index, description = task.description(), "Marked task complete");
        Ok(task)
    }

    /// Drops every completed task, keeping the others in order.
    ///
    /// Returns how many tasks were removed.
    pub fn remove_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.is_complete());
        let removed = before - self.tasks.len();
        debug!(removed, remaining = self.tasks.len(), "Removed completed tasks");
        removed
    }

    /// Replaces the description, due date and priority of a task.
    ///
    /// The status is left as it was.
    ///
    /// # Errors
    /// Returns `TaskError::IndexOutOfRange` if no task has that position.
    pub fn update(
        &mut self,
        index: usize,
        description: impl Into<String>,
        due_date: Option<NaiveDate>,
        priority: Priority,
    ) -> Result<&Task, TaskError> {
        let task = self.get_mut(index)?;
        task.replace_details(description.into(), due_date, priority);
        debug!(index, description = task.description(), "Updated task");
        Ok(task)
    }

    /// Iterates over tasks whose description contains `keyword`, ignoring case.
    ///
    /// Positions in the result count matches only and start at 1. An empty
    /// keyword matches every task.
    pub fn search(&self, keyword: &str) -> impl Iterator<Item = (usize, &Task)> + '_ {
        let needle = keyword.to_lowercase();
        self.tasks
            .iter()
            .filter(move |task| task.description().to_lowercase().contains(&needle))
            .enumerate()
            .map(|(i, task)| (i + 1, task))
    }

    /// Reorders the list. Tasks with equal keys keep their relative order.
    pub fn sort(&mut self, criteria: SortCriteria) {
        match criteria {
            SortCriteria::DueDate => self
                .tasks
                .sort_by_key(|task| task.due_date().unwrap_or(NaiveDate::MAX)),
            SortCriteria::Priority => self.tasks.sort_by_key(Task::priority),
            SortCriteria::Status => self.tasks.sort_by_key(|task| task.status().as_str()),
        }
        debug!(%criteria, "Sorted tasks");
    }

    /// Reorders the list by a criteria name such as `"priority"`.
    ///
    /// # Errors
    /// Returns `TaskError::InvalidArgument` for an unknown name; the list is
    /// left untouched.
    pub fn sort_by_name(&mut self, criteria: &str) -> Result<(), TaskError> {
        let criteria = criteria.parse()?;
        self.sort(criteria);
        Ok(())
    }

    /// Writes every task to `store`, replacing what it held.
    ///
    /// # Errors
    /// Propagates the store's write error.
    pub fn save_to(&self, store: &impl TaskStore) -> Result<(), TaskError> {
        store.save(&self.tasks)
    }

    /// Appends every task held by `store` and returns how many were added.
    ///
    /// If a record is malformed the load stops there and the tasks read
    /// before it remain in the collection.
    ///
    /// # Errors
    /// Propagates the store's read or decode error.
    pub fn load_from(&mut self, store: &impl TaskStore) -> Result<usize, TaskError> {
        store.load_into(&mut self.tasks)
    }

    /// Saves to a flat text file, overwriting it.
    ///
    /// # Errors
    /// Returns `TaskError::Io` if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TaskError> {
        self.save_to(&FlatFileStore::new(path.as_ref()))
    }

    /// Appends the tasks of a flat text file.
    ///
    /// # Errors
    /// Returns `TaskError::FileNotFound` if the file does not exist,
    /// `TaskError::Record` for the first malformed line and `TaskError::Io`
    /// for other read failures.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize, TaskError> {
        self.load_from(&FlatFileStore::new(path.as_ref()))
    }
}

impl From<Vec<Task>> for TaskCollection {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl FromIterator<Task> for TaskCollection {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}
