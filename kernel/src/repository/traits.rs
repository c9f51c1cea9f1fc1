//! Task Repository - Traits
//!
//! This module defines the `TaskStore` trait.

use crate::domain::{Task, TaskError};

/// Contract for persisting an ordered list of tasks.
///
/// The collection depends on this trait rather than on a file format, so
/// tests can substitute an in-memory store.
pub trait TaskStore {
    /// Replaces the stored tasks with `tasks`, keeping their order.
    ///
    /// # Errors
    /// Returns `TaskError::Io` if the backing storage cannot be written.
    fn save(&self, tasks: &[Task]) -> Result<(), TaskError>;

    /// Appends every stored task to `tasks` and returns how many were added.
    ///
    /// Loading stops at the first record that cannot be decoded. Tasks
    /// appended before that record stay in `tasks`.
    ///
    /// # Errors
    /// Returns `TaskError::FileNotFound` when there is nothing to load from,
    /// `TaskError::Record` for an undecodable record and `TaskError::Io`
    /// for other read failures.
    fn load_into(&self, tasks: &mut Vec<Task>) -> Result<usize, TaskError>;
}
