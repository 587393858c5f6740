//! Record store abstractions and implementations.
//!
//! # Responsibility
//! - Define the session record store contract used by the service layer.
//! - Keep storage details out of query, statistics and persistence code.
//!
//! # Invariants
//! - Store writes never validate; validation happens when a `Book` is built.

pub mod book_repo;
