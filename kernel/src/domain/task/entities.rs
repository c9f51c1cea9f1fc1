//! Task domain - Task entity and status
//!
//! This module defines the Task entity and the two-state TaskStatus enum.

use chrono::NaiveDate;
use core::fmt;
use serde::Serialize;

use crate::domain::{ParseError, Priority};

/// Task completion status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum TaskStatus {
    /// Task still has to be done.
    #[default]
    Incomplete,
    /// Task has been done.
    Complete,
}

impl TaskStatus {
    /// Parses status from its persisted representation.
    ///
    /// # Errors
    /// Returns `ParseError::UnknownStatus` for anything other than
    /// `Complete` or `Incomplete` (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        match s.trim().to_lowercase().as_str() {
            "incomplete" => Ok(Self::Incomplete),
            "complete" => Ok(Self::Complete),
            _ => Err(ParseError::UnknownStatus(s.to_string())),
        }
    }

    /// Returns the persisted string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Incomplete => "Incomplete",
            Self::Complete => "Complete",
        }
    }

    /// Checks if the status is `Complete`.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single to-do item.
///
/// Fields are only changed through [`Task::mark_complete`] or the owning
/// collection. No validation happens here: an empty description or an
/// out-of-scale priority is accepted as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    description: String,
    due_date: Option<NaiveDate>,
    priority: Priority,
    status: TaskStatus,
}

impl Task {
    /// Constructs a new incomplete task.
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        due_date: Option<NaiveDate>,
        priority: Priority,
    ) -> Self {
        Self {
            description: description.into(),
            due_date,
            priority,
            status: TaskStatus::Incomplete,
        }
    }

    /// Constructs an incomplete task with no due date and default priority.
    #[must_use]
    pub fn with_description(description: impl Into<String>) -> Self {
        Self::new(description, None, Priority::DEFAULT)
    }

    /// Rebuilds a task in a known status, used when reading persisted records.
    pub(crate) fn restore(
        description: String,
        due_date: Option<NaiveDate>,
        priority: Priority,
        status: TaskStatus,
    ) -> Self {
        Self {
            description,
            due_date,
            priority,
            status,
        }
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Checks if the task has been completed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.status.is_complete()
    }

    /// Marks the task complete. Calling it again has no further effect.
    pub fn mark_complete(&mut self) {
        self.status = TaskStatus::Complete;
    }

    /// Replaces everything but the status.
    pub(crate) fn replace_details(
        &mut self,
        description: String,
        due_date: Option<NaiveDate>,
        priority: Priority,
    ) {
        self.description = description;
        self.due_date = due_date;
        self.priority = priority;
    }

    /// Human-readable one-line summary.
    ///
    /// `Buy milk (Due: 2024-05-01, Priority: 2, Status: Incomplete)`; a
    /// missing due date prints as `None`.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Due: ", self.description)?;
        match self.due_date {
            Some(date) => write!(f, "{}", date.format(super::record::DATE_FORMAT))?,
            None => f.write_str("None")?,
        }
        write!(f, ", Priority: {}, Status: {})", self.priority, self.status)
    }
}
