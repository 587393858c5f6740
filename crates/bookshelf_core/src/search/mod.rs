//! Query entry points over a record snapshot.
//!
//! # Responsibility
//! - Expose substring search and display sorting as pure functions.
//! - Own the user-facing search field and sort key vocabularies.

pub mod query;
