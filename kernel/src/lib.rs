//! Todo Kernel - Core library for the flat-file task tracker.
//!
//! This crate holds everything with real logic: the task entity, the
//! ordered collection and its sort/search rules, the line-oriented
//! persistence format, and the configuration and logging setup shared by
//! front ends. It never writes to the terminal.

/// Ordered task collection and its operations.
pub mod collection;
/// Domain types: tasks, status, priority, errors and the record codec.
pub mod domain;
/// Infrastructure components (config, telemetry).
pub mod infrastructure;
/// Task persistence behind the `TaskStore` trait.
pub mod repository;

pub use collection::{SortCriteria, TaskCollection};
pub use domain::{ErrorKind, ParseError, Priority, Task, TaskError, TaskStatus};
pub use repository::{DEFAULT_TASK_FILE, FlatFileStore, TaskStore};
