//! Core domain logic for Bookshelf.
//! This crate is the single source of truth for book record invariants.

pub mod api;
pub mod infra;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use api::handler::BookHandler;
pub use api::query::BookQueryParams;
pub use api::response::{ApiResponse, ResponseBody, ResponseData, ResponseStatus};
pub use infra::clock::{Clock, SystemClock};
pub use infra::id_gen::{IdGenerator, RandomIdGenerator, BOOK_ID_LEN};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::book::{Book, BookId, BookSummary, BookValidationError, NewBook};
pub use repo::book_repo::{
    BookFilter, BookRepository, InMemoryBookRepository, RepoError, RepoResult,
};
pub use service::book_service::BookService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
