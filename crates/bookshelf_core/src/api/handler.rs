//! Book request handlers producing response envelopes.
//!
//! # Responsibility
//! - Map each book use-case onto a status code and envelope.
//! - Keep wire messages in one place.
//!
//! # Invariants
//! - Handlers never panic; every repository failure maps to an envelope.

use crate::api::query::BookQueryParams;
use crate::api::response::{ApiResponse, ResponseData};
use crate::model::book::{BookId, BookValidationError, NewBook};
use crate::repo::book_repo::{BookRepository, RepoError};
use crate::service::book_service::BookService;

const MSG_ADD_OK: &str = "Buku berhasil ditambahkan";
const MSG_ADD_MISSING_NAME: &str = "Gagal menambahkan buku. Mohon isi nama buku";
const MSG_ADD_PAGE_RANGE: &str =
    "Gagal menambahkan buku. readPage tidak boleh lebih besar dari pageCount";
const MSG_EDIT_OK: &str = "Buku berhasil diperbarui";
const MSG_EDIT_MISSING_NAME: &str = "Gagal memperbarui buku. Mohon isi nama buku";
const MSG_EDIT_PAGE_RANGE: &str =
    "Gagal memperbarui buku. readPage tidak boleh lebih besar dari pageCount";
const MSG_EDIT_NOT_FOUND: &str = "Gagal memperbarui buku. Id tidak ditemukan";
const MSG_GET_NOT_FOUND: &str = "Buku tidak ditemukan";
const MSG_DELETE_OK: &str = "Buku berhasil dihapus";
const MSG_DELETE_NOT_FOUND: &str = "Buku gagal dihapus. Id tidak ditemukan";

/// Operation a failure is reported for; selects the wire message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Add,
    Edit,
    Get,
    Delete,
}

/// Envelope-producing facade over [`BookService`].
pub struct BookHandler<R: BookRepository> {
    service: BookService<R>,
}

impl<R: BookRepository> BookHandler<R> {
    pub fn new(service: BookService<R>) -> Self {
        Self { service }
    }

    /// Borrows the wrapped service.
    pub fn service(&self) -> &BookService<R> {
        &self.service
    }

    /// `POST /books`
    pub fn add_book(&mut self, payload: &NewBook) -> ApiResponse {
        match self.service.add_book(payload) {
            Ok(book_id) => ApiResponse::success(
                201,
                Some(MSG_ADD_OK),
                Some(ResponseData::Created { book_id }),
            ),
            Err(err) => failure_response(Operation::Add, &err),
        }
    }

    /// `GET /books`
    pub fn get_all_books(&self, params: BookQueryParams) -> ApiResponse {
        let books = self.service.list_books(&params.into_filter());
        ApiResponse::success(200, None, Some(ResponseData::Books { books }))
    }

    /// `GET /books/{id}`
    pub fn get_book_by_id(&self, id: &str) -> ApiResponse {
        match self.service.get_book(&BookId::from(id)) {
            Ok(book) => ApiResponse::success(200, None, Some(ResponseData::Book { book })),
            Err(err) => failure_response(Operation::Get, &err),
        }
    }

    /// `PUT /books/{id}`
    pub fn edit_book_by_id(&mut self, id: &str, payload: &NewBook) -> ApiResponse {
        match self.service.edit_book(&BookId::from(id), payload) {
            Ok(()) => ApiResponse::success(200, Some(MSG_EDIT_OK), None),
            Err(err) => failure_response(Operation::Edit, &err),
        }
    }

    /// `DELETE /books/{id}`
    pub fn delete_book_by_id(&mut self, id: &str) -> ApiResponse {
        match self.service.delete_book(&BookId::from(id)) {
            Ok(()) => ApiResponse::success(200, Some(MSG_DELETE_OK), None),
            Err(err) => failure_response(Operation::Delete, &err),
        }
    }
}

fn failure_response(operation: Operation, err: &RepoError) -> ApiResponse {
    let validation_message = |missing_name: bool| match (operation, missing_name) {
        (Operation::Edit, true) => MSG_EDIT_MISSING_NAME,
        (Operation::Edit, false) => MSG_EDIT_PAGE_RANGE,
        (_, true) => MSG_ADD_MISSING_NAME,
        (_, false) => MSG_ADD_PAGE_RANGE,
    };

    match err {
        RepoError::Validation(BookValidationError::MissingName) => {
            ApiResponse::fail(400, validation_message(true))
        }
        RepoError::Validation(BookValidationError::InvalidPageRange { .. }) => {
            ApiResponse::fail(400, validation_message(false))
        }
        RepoError::NotFound(_) => {
            let message = match operation {
                Operation::Edit => MSG_EDIT_NOT_FOUND,
                Operation::Delete => MSG_DELETE_NOT_FOUND,
                Operation::Add | Operation::Get => MSG_GET_NOT_FOUND,
            };
            ApiResponse::fail(404, message)
        }
        RepoError::IdCollision { .. } => ApiResponse::error(err.to_string()),
    }
}
