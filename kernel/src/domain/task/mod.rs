//! Task domain module
//!
//! This module defines the Task entity, its lifecycle status,
//! and the flat record codec used for persistence.
pub mod entities;
pub mod record;

// Re-export commonly used items
pub use entities::{Task, TaskStatus};
pub use record::{DATE_FORMAT, parse_date, parse_due_date};
