//! Leaf collaborators used by the repository.
//!
//! # Responsibility
//! - Produce fresh book identifiers.
//! - Provide the wall-clock reading stamped onto records.
//!
//! Both are traits so tests can swap in deterministic implementations.

pub mod clock;
pub mod id_gen;
