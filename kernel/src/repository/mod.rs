//! Repository Layer - Task persistence
//!
//! Code depends on the `TaskStore` trait, not on the flat file format.

// Re-export all public items from submodules
pub use file::{DEFAULT_TASK_FILE, FlatFileStore};
pub use traits::TaskStore;

// Declare submodules
mod file;
mod traits;
