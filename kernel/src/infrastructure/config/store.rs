//! Task file configuration.
//!
//! This module defines where the task list is persisted.

use serde::Deserialize;
use std::path::PathBuf;

use crate::repository::DEFAULT_TASK_FILE;

/// Task file settings.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    /// Path of the flat task file (default: `tasks.txt`).
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from(DEFAULT_TASK_FILE)
}
