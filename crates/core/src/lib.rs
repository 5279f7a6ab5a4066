//! Pure domain logic for the student roster.
//!
//! This crate has no I/O and no async: it holds the record types, the
//! submission validator, and the query-shaping functions (search, sort,
//! filter). The API and repository layers depend on it; it depends on
//! nothing internal.

pub mod error;
pub mod query;
pub mod student;
pub mod types;
pub mod validation;
