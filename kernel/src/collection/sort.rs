//! Sort criteria for a task collection.

use core::fmt;
use core::str::FromStr;

use crate::domain::TaskError;

/// Key used to reorder a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortCriteria {
    /// Ascending due date; tasks without one go last.
    #[default]
    DueDate,
    /// Ascending priority.
    Priority,
    /// Status name in lexical order, so `Complete` before `Incomplete`.
    Status,
}

impl SortCriteria {
    /// Every criteria, in the order they are offered to users.
    pub const ALL: [Self; 3] = [Self::DueDate, Self::Priority, Self::Status];

    /// Returns the name users type to select this criteria.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DueDate => "due_date",
            Self::Priority => "priority",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for SortCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortCriteria {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                TaskError::InvalidArgument(format!(
                    "unknown sort criteria '{s}' (expected due_date, priority or status)"
                ))
            })
    }
}
