//! Task Repository - Flat text file
//!
//! One record per line, no header. See [`Task::serialize`] for the layout.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::traits::TaskStore;
use crate::domain::{Task, TaskError};

/// File name used when the caller does not supply one.
pub const DEFAULT_TASK_FILE: &str = "tasks.txt";

/// A [`TaskStore`] backed by a line-oriented text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatFileStore {
    path: PathBuf,
}

impl FlatFileStore {
    /// Creates a store for the given path. Nothing is touched on disk yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> TaskError {
        TaskError::from_io(&self.path, source)
    }
}

impl Default for FlatFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_TASK_FILE)
    }
}

impl TaskStore for FlatFileStore {
    fn save(&self, tasks: &[Task]) -> Result<(), TaskError> {
        // Save never reports FileNotFound, even for a missing parent directory.
        let file = File::create(&self.path).map_err(|source| TaskError::Io {
            path: self.path.clone(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        for task in tasks {
            writeln!(writer, "{}", task.serialize()).map_err(|e| self.io_error(e))?;
        }
        writer.flush().map_err(|e| self.io_error(e))?;

        info!(path = %self.path.display(), count = tasks.len(), "Saved tasks");
        Ok(())
    }

    fn load_into(&self, tasks: &mut Vec<Task>) -> Result<usize, TaskError> {
        let file = File::open(&self.path).map_err(|e| self.io_error(e))?;
        let reader = BufReader::new(file);

        let mut loaded = 0;
        for (number, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| self.io_error(e))?;
            if line.trim().is_empty() {
                continue;
            }
            match Task::deserialize(&line) {
                Ok(task) => {
                    tasks.push(task);
                    loaded += 1;
                }
                Err(source) => {
                    warn!(
                        path = %self.path.display(),
                        line = number + 1,
                        loaded,
                        error = %source,
                        "Aborting load on malformed record"
                    );
                    return Err(TaskError::Record {
                        line: number + 1,
                        source,
                    });
                }
            }
        }

        info!(path = %self.path.display(), count = loaded, "Loaded tasks");
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorKind, ParseError, Priority, TaskStatus};
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn sample() -> Vec<Task> {
        let mut done = Task::new(
            "Renew passport",
            NaiveDate::from_ymd_opt(2024, 9, 1),
            Priority::new(4),
        );
        done.mark_complete();
        vec![Task::with_description("Buy milk"), done]
    }

    #[test]
    fn save_writes_one_record_per_line() {
        let dir = TempDir::new().unwrap();
        let store = FlatFileStore::new(dir.path().join("tasks.txt"));

        store.save(&sample()).unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            contents,
            "Buy milk,,1,Incomplete\nRenew passport,2024-09-01,4,Complete\n"
        );
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = TempDir::new().unwrap();
        let store = FlatFileStore::new(dir.path().join("tasks.txt"));
        fs::write(store.path(), "old,,1,Incomplete\nolder,,2,Incomplete\n").unwrap();

        store.save(&[Task::with_description("new")]).unwrap();

        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "new,,1,Incomplete\n"
        );
    }

    #[test]
    fn load_appends_and_skips_blank_lines() {
        let dir = TempDir::new().unwrap();
        let store = FlatFileStore::new(dir.path().join("tasks.txt"));
        fs::write(store.path(), "a,,1,Incomplete\r\n\n   \nb,2024-01-02,3,Complete\n").unwrap();

        let mut tasks = vec![Task::with_description("existing")];
        let loaded = store.load_into(&mut tasks).unwrap();

        assert_eq!(loaded, 2);
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[1].description(), "a");
        assert_eq!(tasks[2].status(), TaskStatus::Complete);
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = FlatFileStore::new(dir.path().join("absent.txt"));

        let mut tasks = Vec::new();
        let err = store.load_into(&mut tasks).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert!(tasks.is_empty());
    }

    #[test]
    fn load_stops_at_first_bad_line_keeping_earlier_tasks() {
        let dir = TempDir::new().unwrap();
        let store = FlatFileStore::new(dir.path().join("tasks.txt"));
        fs::write(
            store.path(),
            "first,,1,Incomplete\nsecond,not-a-date,1,Incomplete\nthird,,1,Incomplete\n",
        )
        .unwrap();

        let mut tasks = Vec::new();
        let err = store.load_into(&mut tasks).unwrap_err();

        assert!(matches!(
            err,
            TaskError::Record {
                line: 2,
                source: ParseError::InvalidDate { .. }
            }
        ));
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].description(), "first");
    }

    #[test]
    fn save_into_missing_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let store = FlatFileStore::new(dir.path().join("no-such-dir").join("tasks.txt"));

        let err = store.save(&sample()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn default_path() {
        assert_eq!(FlatFileStore::default().path(), Path::new("tasks.txt"));
    }
}
