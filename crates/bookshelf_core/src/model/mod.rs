//! Book domain model.
//!
//! # Responsibility
//! - Define the canonical book record and its caller-supplied candidate.
//! - Keep derived state (`finished`) computed, never stored.
//!
//! # Invariants
//! - Every stored book is identified by a unique, immutable `BookId`.
//! - Deletion is a hard removal; there are no tombstones.

pub mod book;
