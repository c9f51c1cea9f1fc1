//! Task priority newtype
//!
//! Priorities are plain integers. The 1-5 scale is a recommendation that
//! callers enforce; the domain accepts any value.

use core::fmt;
use core::str::FromStr;
use serde::Serialize;

use super::ParseError;

/// Task priority (lower sorts first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Priority(i64);

impl Priority {
    /// Lowest value of the recommended scale.
    pub const LOWEST: Self = Self(1);
    /// Highest value of the recommended scale.
    pub const HIGHEST: Self = Self(5);
    /// Priority given to tasks created without one.
    pub const DEFAULT: Self = Self::LOWEST;

    /// Creates a new Priority from a raw value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the inner value.
    #[must_use]
    pub const fn inner(self) -> i64 {
        self.0
    }

    /// Whether the value lies on the recommended 1-5 scale.
    #[must_use]
    pub const fn is_recommended(self) -> bool {
        self.0 >= Self::LOWEST.0 && self.0 <= Self::HIGHEST.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Priority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ParseError::InvalidPriority {
                value: s.to_string(),
            })
    }
}
