//! Runs one command against the task file and writes its output.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use todo_kernel::domain::parse_due_date;
use todo_kernel::{ErrorKind, Task, TaskCollection};
use tracing::debug;

use crate::cli::Command;

/// A task together with the number it is shown under.
#[derive(Serialize)]
struct Numbered<'a> {
    index: usize,
    #[serde(flatten)]
    task: &'a Task,
}

/// Reads the task file, treating a missing file as an empty list.
fn open(path: &Path) -> Result<TaskCollection> {
    let mut tasks = TaskCollection::new();
    match tasks.load(path) {
        Ok(_) => Ok(tasks),
        Err(e) if e.kind() == ErrorKind::FileNotFound => {
            debug!(path = %path.display(), "No task file yet, starting empty");
            Ok(tasks)
        }
        Err(e) => {
            Err(e).with_context(|| format!("Failed to read task file {}", path.display()))
        }
    }
}

fn persist(tasks: &TaskCollection, path: &Path) -> Result<()> {
    tasks
        .save(path)
        .with_context(|| format!("Failed to write task file {}", path.display()))
}

fn print_numbered<'a>(
    out: &mut impl Write,
    entries: impl Iterator<Item = (usize, &'a Task)>,
    json: bool,
) -> Result<()> {
    let entries: Vec<Numbered<'_>> = entries
        .map(|(index, task)| Numbered { index, task })
        .collect();
    if json {
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
    } else {
        for entry in &entries {
            writeln!(out, "{}. {}", entry.index, entry.task)?;
        }
    }
    Ok(())
}

/// Executes `command` on the task file at `path`.
///
/// Commands that change the list write it back before reporting success.
pub fn run(command: Command, path: &Path, out: &mut impl Write) -> Result<()> {
    let mut tasks = open(path)?;

    match command {
        Command::Add {
            description,
            due,
            priority,
        } => {
            let due_date = parse_due_date(&due)?;
            let task = Task::new(description, due_date, priority);
            let message = format!("Added task {}: {task}", tasks.len() + 1);
            tasks.add(task);
            persist(&tasks, path)?;
            writeln!(out, "{message}")?;
        }
        Command::List { json } => {
            if tasks.is_empty() && !json {
                writeln!(out, "No tasks in the to-do list.")?;
            } else {
                print_numbered(out, tasks.view(), json)?;
            }
        }
        Command::Complete { index } => {
            let message = format!(
                "Task '{}' marked as complete.",
                tasks.mark_complete(index)?.description()
            );
            persist(&tasks, path)?;
            writeln!(out, "{message}")?;
        }
        Command::Purge => {
            let removed = tasks.remove_completed();
            persist(&tasks, path)?;
            writeln!(out, "Removed {removed} completed task(s).")?;
        }
        Command::Update {
            index,
            description,
            due,
            priority,
        } => {
            let due_date = parse_due_date(&due)?;
            let message = format!(
                "Task '{}' updated.",
                tasks.update(index, description, due_date, priority)?.description()
            );
            persist(&tasks, path)?;
            writeln!(out, "{message}")?;
        }
        Command::Search { keyword, json } => {
            if json {
                print_numbered(out, tasks.search(&keyword), true)?;
            } else if tasks.search(&keyword).next().is_none() {
                writeln!(out, "No matching tasks found for '{keyword}'.")?;
            } else {
                writeln!(out, "Matching tasks for '{keyword}':")?;
                print_numbered(out, tasks.search(&keyword), false)?;
            }
        }
        Command::Sort { criteria } => {
            tasks.sort_by_name(&criteria)?;
            persist(&tasks, path)?;
            writeln!(out, "Tasks sorted by {criteria}.")?;
        }
        Command::Import { path: source } => {
            let added = tasks
                .load(&source)
                .with_context(|| format!("Failed to import {}", source.display()))?;
            persist(&tasks, path)?;
            writeln!(out, "Imported {added} task(s) from {}.", source.display())?;
        }
        Command::Export { path: target } => {
            persist(&tasks, &target)?;
            writeln!(out, "Tasks saved to {}.", target.display())?;
        }
    }

    Ok(())
}
