//! Task domain - Flat record codec
//!
//! One task per line: `description,due_date,priority,status`. The due date
//! is `YYYY-MM-DD` or empty. Commas inside a description are not escaped,
//! so such descriptions cannot be read back.

use chrono::NaiveDate;

use super::entities::{Task, TaskStatus};
use crate::domain::{ParseError, Priority};

/// `chrono` format string for due dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Separator between record fields.
pub const FIELD_SEPARATOR: char = ',';

/// Number of fields in a record.
pub const RECORD_FIELDS: usize = 4;

/// Parses a strict `YYYY-MM-DD` date.
///
/// # Errors
/// Returns `ParseError::InvalidDate` if `value` is not a valid calendar date
/// written with a four-digit year and two-digit month and day.
pub fn parse_date(value: &str) -> Result<NaiveDate, ParseError> {
    // chrono's %Y also takes short, signed and space-led years.
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_FORMAT).to_string() == value)
        .ok_or_else(|| ParseError::InvalidDate {
            value: value.to_string(),
        })
}

/// Parses user input for an optional due date; blank input means no date.
///
/// # Errors
/// Returns `ParseError::InvalidDate` for non-blank input that is not a date.
pub fn parse_due_date(input: &str) -> Result<Option<NaiveDate>, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        Ok(None)
    } else {
        parse_date(input).map(Some)
    }
}

impl Task {
    /// Encodes the task as a single record without a line terminator.
    #[must_use]
    pub fn serialize(&self) -> String {
        let due = self
            .due_date()
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default();
        format!(
            "{}{sep}{}{sep}{}{sep}{}",
            self.description(),
            due,
            self.priority(),
            self.status(),
            sep = FIELD_SEPARATOR
        )
    }

    /// Decodes a record produced by [`Task::serialize`].
    ///
    /// # Errors
    /// Returns a `ParseError` when the record does not have exactly four
    /// fields, or when its date, priority or status field is malformed.
    pub fn deserialize(record: &str) -> Result<Self, ParseError> {
        let fields: Vec<&str> = record.split(FIELD_SEPARATOR).collect();
        let [description, due, priority, status] = fields.as_slice() else {
            return Err(ParseError::FieldCount {
                expected: RECORD_FIELDS,
                found: fields.len(),
            });
        };

        let due_date = if due.is_empty() {
            None
        } else {
            Some(parse_date(due)?)
        };
        let priority: Priority = priority.parse()?;
        let status = TaskStatus::parse(status)?;

        Ok(Self::restore(
            (*description).to_string(),
            due_date,
            priority,
            status,
        ))
    }
}
