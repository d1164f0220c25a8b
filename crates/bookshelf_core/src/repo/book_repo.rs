//! Book repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide create/list/get/replace/delete APIs over an ordered book collection.
//! - Assign identity and timestamps; callers never supply them.
//!
//! # Invariants
//! - Write paths validate the candidate before consulting existence.
//! - Insertion order is preserved; replace never moves a record.
//! - Ids are unique across the collection.
//! - The repository performs no logging; callers decide how to report failures.

use crate::infra::clock::{Clock, SystemClock};
use crate::infra::id_gen::{IdGenerator, RandomIdGenerator};
use crate::model::book::{Book, BookId, BookSummary, BookValidationError, NewBook};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Number of generator calls tried before an insert gives up on a unique id.
const MAX_ID_ATTEMPTS: usize = 8;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for book operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(BookValidationError),
    NotFound(BookId),
    /// The id generator kept returning ids already in use.
    IdCollision { attempts: usize },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "book not found: {id}"),
            Self::IdCollision { attempts } => {
                write!(f, "no unique book id after {attempts} attempts")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::IdCollision { .. } => None,
        }
    }
}

impl From<BookValidationError> for RepoError {
    fn from(value: BookValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Optional predicates for listing books. All supplied predicates must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// Case-sensitive substring of the book name.
    pub name: Option<String>,
    pub finished: Option<bool>,
    pub reading: Option<bool>,
}

impl BookFilter {
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(name) = self.name.as_deref() {
            if !book.name().contains(name) {
                return false;
            }
        }
        if let Some(finished) = self.finished {
            if book.finished() != finished {
                return false;
            }
        }
        if let Some(reading) = self.reading {
            if book.reading() != reading {
                return false;
            }
        }
        true
    }
}

/// Repository interface for book CRUD operations.
pub trait BookRepository {
    /// Validates and appends a new book, returning its generated id.
    fn insert_book(&mut self, candidate: &NewBook) -> RepoResult<BookId>;
    /// Lists projections of matching books in insertion order.
    fn list_books(&self, filter: &BookFilter) -> Vec<BookSummary>;
    fn get_book(&self, id: &BookId) -> RepoResult<Book>;
    /// Replaces every caller-owned field of an existing book.
    fn replace_book(&mut self, id: &BookId, candidate: &NewBook) -> RepoResult<()>;
    fn delete_book(&mut self, id: &BookId) -> RepoResult<()>;
}

/// Book repository held entirely in process memory.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository<G = RandomIdGenerator, C = SystemClock> {
    books: Vec<Book>,
    ids: G,
    clock: C,
}

impl InMemoryBookRepository {
    /// Creates an empty repository with random ids and the system clock.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<G: IdGenerator, C: Clock> InMemoryBookRepository<G, C> {
    /// Creates an empty repository with caller-provided collaborators.
    pub fn with_collaborators(ids: G, clock: C) -> Self {
        Self {
            books: Vec::new(),
            ids,
            clock,
        }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn position(&self, id: &BookId) -> Option<usize> {
        self.books.iter().position(|book| book.id() == id)
    }

    fn next_unique_id(&self) -> RepoResult<BookId> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.generate();
            if self.position(&id).is_none() {
                return Ok(id);
            }
        }
        Err(RepoError::IdCollision {
            attempts: MAX_ID_ATTEMPTS,
        })
    }
}

impl<G: IdGenerator, C: Clock> BookRepository for InMemoryBookRepository<G, C> {
    fn insert_book(&mut self, candidate: &NewBook) -> RepoResult<BookId> {
        candidate.validate()?;

        let id = self.next_unique_id()?;
        let book = Book::from_candidate(id.clone(), candidate, self.clock.now());
        self.books.push(book);

        Ok(id)
    }

    fn list_books(&self, filter: &BookFilter) -> Vec<BookSummary> {
        self.books
            .iter()
            .filter(|book| filter.matches(book))
            .map(Book::summary_view)
            .collect()
    }

    fn get_book(&self, id: &BookId) -> RepoResult<Book> {
        self.books
            .iter()
            .find(|book| book.id() == id)
            .cloned()
            .ok_or_else(|| RepoError::NotFound(id.clone()))
    }

    fn replace_book(&mut self, id: &BookId, candidate: &NewBook) -> RepoResult<()> {
        candidate.validate()?;

        let index = self
            .position(id)
            .ok_or_else(|| RepoError::NotFound(id.clone()))?;
        let now = self.clock.now();
        self.books[index].replace_with(candidate, now);

        Ok(())
    }

    fn delete_book(&mut self, id: &BookId) -> RepoResult<()> {
        let index = self
            .position(id)
            .ok_or_else(|| RepoError::NotFound(id.clone()))?;
        self.books.remove(index);

        Ok(())
    }
}

impl<R: BookRepository + ?Sized> BookRepository for &mut R {
    fn insert_book(&mut self, candidate: &NewBook) -> RepoResult<BookId> {
        (**self).insert_book(candidate)
    }

    fn list_books(&self, filter: &BookFilter) -> Vec<BookSummary> {
        (**self).list_books(filter)
    }

    fn get_book(&self, id: &BookId) -> RepoResult<Book> {
        (**self).get_book(id)
    }

    fn replace_book(&mut self, id: &BookId, candidate: &NewBook) -> RepoResult<()> {
        (**self).replace_book(id, candidate)
    }

    fn delete_book(&mut self, id: &BookId) -> RepoResult<()> {
        (**self).delete_book(id)
    }
}
