//! Shared test utilities for integration tests.
//!
//! Provides a scratch directory and a few ready-made task lists.

#![allow(dead_code)]

use anyhow::Result;
use chrono::NaiveDate;
use std::path::PathBuf;
use tempfile::TempDir;
use todo_kernel::{Priority, Task, TaskCollection};

/// Integration test context owning a temporary directory.
pub struct IntegrationTestContext {
    /// Temporary directory for task files
    pub temp_dir: TempDir,
}

impl IntegrationTestContext {
    /// Creates a new context with an empty scratch directory.
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Path of a file inside the scratch directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Writes raw contents into the scratch directory and returns the path.
    pub fn write(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.path(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

/// Shorthand for a calendar date.
pub fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

/// A mixed list: dated and undated, several priorities, one complete.
pub fn household() -> TaskCollection {
    let mut tasks = TaskCollection::from(vec![
        Task::new("Pay rent", date(2024, 3, 1), Priority::new(5)),
        Task::new("Buy milk", None, Priority::new(2)),
        Task::new("Book dentist", date(2024, 2, 15), Priority::new(3)),
        Task::new("Water plants", None, Priority::new(1)),
        Task::new("File taxes", date(2024, 4, 15), Priority::new(5)),
    ]);
    tasks
        .mark_complete(3)
        .expect("fixture index is in range");
    tasks
}

/// Descriptions in current order.
pub fn descriptions(tasks: &TaskCollection) -> Vec<String> {
    tasks
        .tasks()
        .iter()
        .map(|t| t.description().to_string())
        .collect()
}
