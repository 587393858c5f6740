//! Domain model for a personal book library.
//!
//! # Responsibility
//! - Define the book record and the draft it is built from.
//! - Own the closed genre list and draft validation rules.
//!
//! # Invariants
//! - Records are never edited in place; there is no stable ID besides the
//!   case-insensitive title, which may repeat.

pub mod book;
