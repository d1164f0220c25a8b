//! Transport-agnostic response layer.
//!
//! # Responsibility
//! - Translate service results into `{status, message, data}` envelopes
//!   paired with HTTP-style status codes.
//! - Coerce raw query-string values into typed list filters.
//!
//! # Invariants
//! - No sockets, routing or I/O live here; callers own the transport.
//! - Failure messages are stable wire text and must not change casually.

pub mod handler;
pub mod query;
pub mod response;
