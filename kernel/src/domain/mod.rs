//! Domain Layer - Value Objects and Entities
//!
//! This module defines the core domain types for the task tracker.
//!
//! The domain module is organized into submodules:
//! - `priority`: The `Priority` newtype
//! - `errors`: Error types for parsing, lookup and storage failures
//! - `task`: Task entity, status and the flat record codec

// Re-export all public items from submodules
pub use errors::{ErrorKind, ParseError, TaskError};
pub use priority::Priority;
pub use task::{DATE_FORMAT, Task, TaskStatus, parse_date, parse_due_date};

// Declare submodules
mod errors;
mod priority;
mod task;
