//! Repository layer abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for books.
//! - Keep collection bookkeeping away from service orchestration.
//!
//! # Invariants
//! - Repository writes must pass `NewBook::validate()` before any mutation.
//! - Repository APIs return semantic errors (`NotFound`, `Validation`).

pub mod book_repo;
