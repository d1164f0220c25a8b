//! Book use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for core callers.
//! - Delegate storage to repository implementations.
//! - Log one metadata-only event per use-case outcome.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - Log lines carry ids and failure kinds only, never book content.

use crate::model::book::{Book, BookId, BookSummary, BookValidationError, NewBook};
use crate::repo::book_repo::{BookFilter, BookRepository, RepoError, RepoResult};
use log::{debug, info, warn};

/// Use-case service wrapper for book CRUD operations.
pub struct BookService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> BookService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Borrows the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Adds a book and returns its generated id.
    pub fn add_book(&mut self, candidate: &NewBook) -> RepoResult<BookId> {
        let result = self.repo.insert_book(candidate);
        match &result {
            Ok(id) => info!("event=book_add module=service status=ok book_id={id}"),
            Err(err) => log_failure("book_add", None, err),
        }
        result
    }

    /// Lists book projections matching every supplied predicate.
    pub fn list_books(&self, filter: &BookFilter) -> Vec<BookSummary> {
        let books = self.repo.list_books(filter);
        debug!(
            "event=book_list module=service status=ok name_filter={} finished={:?} reading={:?} count={}",
            filter.name.is_some(),
            filter.finished,
            filter.reading,
            books.len()
        );
        books
    }

    /// Gets one full book record by id.
    pub fn get_book(&self, id: &BookId) -> RepoResult<Book> {
        let result = self.repo.get_book(id);
        if let Err(err) = &result {
            log_failure("book_get", Some(id), err);
        }
        result
    }

    /// Replaces every caller-owned field of an existing book.
    ///
    /// Validation errors take precedence over `NotFound`.
    pub fn edit_book(&mut self, id: &BookId, candidate: &NewBook) -> RepoResult<()> {
        let result = self.repo.replace_book(id, candidate);
        match &result {
            Ok(()) => info!("event=book_edit module=service status=ok book_id={id}"),
            Err(err) => log_failure("book_edit", Some(id), err),
        }
        result
    }

    /// Removes a book permanently.
    pub fn delete_book(&mut self, id: &BookId) -> RepoResult<()> {
        let result = self.repo.delete_book(id);
        match &result {
            Ok(()) => info!("event=book_delete module=service status=ok book_id={id}"),
            Err(err) => log_failure("book_delete", Some(id), err),
        }
        result
    }
}

fn log_failure(event: &str, id: Option<&BookId>, err: &RepoError) {
    let book_id = id.map(BookId::as_str).unwrap_or("-");
    warn!(
        "event={event} module=service status=error kind={} book_id={book_id}",
        failure_kind(err)
    );
}

/// Stable, content-free label for a repository failure.
pub fn failure_kind(err: &RepoError) -> &'static str {
    match err {
        RepoError::Validation(BookValidationError::MissingName) => "missing_name",
        RepoError::Validation(BookValidationError::InvalidPageRange { .. }) => {
            "invalid_page_range"
        }
        RepoError::NotFound(_) => "not_found",
        RepoError::IdCollision { .. } => "id_collision",
    }
}
