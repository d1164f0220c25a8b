//! Book domain model.
//!
//! # Responsibility
//! - Define the stored `Book` record and the caller-supplied `NewBook` candidate.
//! - Own the validation rules every write path must pass.
//! - Build records from candidates; callers validate once before building.
//!
//! # Invariants
//! - `id` and `inserted_at` are assigned once by the repository and never change.
//! - `read_page <= page_count` for every stored record.
//! - `finished` is derived from page counters on every read; it is never stored.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque unique identifier of a stored book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for BookId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for BookId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Validation failures for book candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    /// `name` is absent or empty.
    MissingName,
    /// `read_page` exceeds `page_count`.
    InvalidPageRange { read_page: u32, page_count: u32 },
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingName => write!(f, "book name is required"),
            Self::InvalidPageRange {
                read_page,
                page_count,
            } => write!(
                f,
                "readPage ({read_page}) must not be greater than pageCount ({page_count})"
            ),
        }
    }
}

impl Error for BookValidationError {}

/// Caller-supplied candidate for insert and full replace.
///
/// Unknown wire fields are rejected, so derived or server-owned fields
/// (`finished`, `id`, timestamps) cannot be supplied. A missing `name`
/// decodes to `None` and surfaces later as `MissingName`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewBook {
    #[serde(default)]
    pub name: Option<String>,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
}

impl NewBook {
    /// Checks the candidate against write-path rules.
    ///
    /// Rules are evaluated in order and the first failure wins:
    /// 1. `name` must be present and non-empty.
    /// 2. `read_page` must not exceed `page_count`.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => {}
            _ => return Err(BookValidationError::MissingName),
        }

        if self.read_page > self.page_count {
            return Err(BookValidationError::InvalidPageRange {
                read_page: self.read_page,
                page_count: self.page_count,
            });
        }

        Ok(())
    }

    /// Returns whether the candidate would be stored as finished.
    pub fn is_finished(&self) -> bool {
        self.read_page == self.page_count
    }
}

/// Stored book record.
///
/// Fields are private so that only the repository can assign identity and
/// timestamps. Use the accessors for reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    name: String,
    year: i32,
    author: String,
    summary: String,
    publisher: String,
    page_count: u32,
    read_page: u32,
    reading: bool,
    inserted_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Book {
    /// Builds a record from a candidate the repository has already validated.
    pub(crate) fn from_candidate(id: BookId, candidate: &NewBook, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: candidate.name.clone().unwrap_or_default(),
            year: candidate.year,
            author: candidate.author.clone(),
            summary: candidate.summary.clone(),
            publisher: candidate.publisher.clone(),
            page_count: candidate.page_count,
            read_page: candidate.read_page,
            reading: candidate.reading,
            inserted_at: now,
            updated_at: now,
        }
    }

    /// Overwrites every caller-owned field from an already validated `candidate`.
    ///
    /// `id` and `inserted_at` are kept. `updated_at` never moves backwards.
    pub(crate) fn replace_with(&mut self, candidate: &NewBook, now: DateTime<Utc>) {
        let replacement = Self::from_candidate(self.id.clone(), candidate, now);
        *self = Self {
            inserted_at: self.inserted_at,
            updated_at: now.max(self.updated_at),
            ..replacement
        };
    }

    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    pub fn read_page(&self) -> u32 {
        self.read_page
    }

    pub fn reading(&self) -> bool {
        self.reading
    }

    /// Derived: the book has been read to its last page.
    pub fn finished(&self) -> bool {
        self.read_page == self.page_count
    }

    pub fn inserted_at(&self) -> DateTime<Utc> {
        self.inserted_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the caller-owned fields as a candidate.
    pub fn to_new_book(&self) -> NewBook {
        NewBook {
            name: Some(self.name.clone()),
            year: self.year,
            author: self.author.clone(),
            summary: self.summary.clone(),
            publisher: self.publisher.clone(),
            page_count: self.page_count,
            read_page: self.read_page,
            reading: self.reading,
        }
    }

    /// Returns the list projection of this record.
    pub fn summary_view(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            publisher: self.publisher.clone(),
        }
    }
}

impl Serialize for Book {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Book", 12)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("year", &self.year)?;
        state.serialize_field("author", &self.author)?;
        state.serialize_field("summary", &self.summary)?;
        state.serialize_field("publisher", &self.publisher)?;
        state.serialize_field("pageCount", &self.page_count)?;
        state.serialize_field("readPage", &self.read_page)?;
        state.serialize_field("finished", &self.finished())?;
        state.serialize_field("reading", &self.reading)?;
        state.serialize_field("insertedAt", &format_timestamp(self.inserted_at))?;
        state.serialize_field("updatedAt", &format_timestamp(self.updated_at))?;
        state.end()
    }
}

/// List projection exposing only `id`, `name` and `publisher`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookSummary {
    pub id: BookId,
    pub name: String,
    pub publisher: String,
}

/// Renders a timestamp as ISO-8601 UTC with millisecond precision.
pub fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::{Book, BookId, BookValidationError, NewBook};
    use chrono::{TimeZone, Utc};

    fn candidate(name: Option<&str>, page_count: u32, read_page: u32) -> NewBook {
        NewBook {
            name: name.map(str::to_string),
            year: 2020,
            author: "A".to_string(),
            summary: "S".to_string(),
            publisher: "P".to_string(),
            page_count,
            read_page,
            reading: false,
        }
    }

    #[test]
    fn missing_name_wins_over_page_range() {
        let err = candidate(None, 10, 20).validate().unwrap_err();
        assert_eq!(err, BookValidationError::MissingName);
    }

    #[test]
    fn whitespace_name_is_accepted() {
        assert!(candidate(Some(" "), 10, 10).validate().is_ok());
    }

    #[test]
    fn from_candidate_copies_fields_and_stamps_both_timestamps() {
        let t0 = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();

        let book = Book::from_candidate(BookId::from("abc"), &candidate(Some("a"), 5, 1), t0);

        assert_eq!(book.id().as_str(), "abc");
        assert_eq!(book.to_new_book(), candidate(Some("a"), 5, 1));
        assert!(!book.finished());
        assert_eq!(book.inserted_at(), t0);
        assert_eq!(book.updated_at(), t0);
    }

    #[test]
    fn replace_keeps_identity_and_never_moves_updated_at_back() {
        let t0 = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let earlier = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let mut book = Book::from_candidate(BookId::from("abc"), &candidate(Some("a"), 5, 1), t0);

        book.replace_with(&candidate(Some("b"), 5, 5), earlier);

        assert_eq!(book.id().as_str(), "abc");
        assert_eq!(book.name(), "b");
        assert!(book.finished());
        assert_eq!(book.inserted_at(), t0);
        assert_eq!(book.updated_at(), t0);
    }
}
