//! Aggregate statistics over a record snapshot.

pub mod summary;
