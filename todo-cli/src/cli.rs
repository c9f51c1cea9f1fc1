//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use todo_kernel::Priority;

/// Track tasks in a flat text file.
#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(about = "Track tasks in a flat text file")]
#[command(version)]
pub struct Cli {
    /// Task file to use instead of the configured one
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Configuration file (default: ./todo.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// One operation on the task list.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a task
    #[command(display_order = 1)]
    Add {
        /// What has to be done
        description: String,

        /// Due date (YYYY-MM-DD)
        #[arg(short, long, default_value = "")]
        due: String,

        /// Priority from 1 (lowest) to 5
        #[arg(short, long, default_value_t = Priority::DEFAULT, value_parser = parse_priority)]
        priority: Priority,
    },
    /// List tasks in their current order
    #[command(display_order = 2, visible_alias = "ls")]
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Mark a task complete
    #[command(display_order = 3, visible_alias = "done")]
    Complete {
        /// Task number as shown by `list`
        index: usize,
    },
    /// Remove all completed tasks
    #[command(display_order = 4)]
    Purge,
    /// Replace a task's description, due date and priority
    #[command(display_order = 5)]
    Update {
        /// Task number as shown by `list`
        index: usize,

        /// New description
        description: String,

        /// New due date (YYYY-MM-DD); omit for none
        #[arg(short, long, default_value = "")]
        due: String,

        /// New priority from 1 (lowest) to 5
        #[arg(short, long, default_value_t = Priority::DEFAULT, value_parser = parse_priority)]
        priority: Priority,
    },
    /// Find tasks whose description contains a keyword (case-insensitive)
    #[command(display_order = 6)]
    Search {
        /// Text to look for
        keyword: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Reorder tasks by due_date, priority or status
    #[command(display_order = 7)]
    Sort {
        /// Sort key
        #[arg(default_value = "due_date")]
        criteria: String,
    },
    /// Append the tasks of another file
    #[command(display_order = 8)]
    Import {
        /// File to read
        path: PathBuf,
    },
    /// Write the task list to another file
    #[command(display_order = 9)]
    Export {
        /// File to write
        path: PathBuf,
    },
}

/// Accepts integers on the recommended priority scale only.
fn parse_priority(value: &str) -> Result<Priority, String> {
    let priority = value.parse::<Priority>().map_err(|e| e.to_string())?;
    if priority.is_recommended() {
        Ok(priority)
    } else {
        Err(format!(
            "{priority} is not between {} and {}",
            Priority::LOWEST,
            Priority::HIGHEST
        ))
    }
}
