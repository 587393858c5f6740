//! Read/unread summary for a library.
//!
//! # Invariants
//! - `read + unread == total`.
//! - `read_percentage` is `0.0` for an empty library instead of dividing
//!   by zero.

use crate::model::book::Book;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Read-progress summary computed on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LibraryStats {
    pub total: usize,
    pub read: usize,
    pub unread: usize,
    /// `read / total * 100`, or `0.0` when `total == 0`.
    pub read_percentage: f64,
}

impl LibraryStats {
    /// Share of read books in `[0.0, 1.0]`, suitable for progress bars.
    pub fn read_fraction(&self) -> f64 {
        self.read_percentage / 100.0
    }
}

impl Display for LibraryStats {
    /// Renders the "books read" metric, e.g. `1 (50.0%)`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.1}%)", self.read, self.read_percentage)
    }
}

/// Computes totals for `books`.
pub fn compute(books: &[Book]) -> LibraryStats {
    let total = books.len();
    let read = books.iter().filter(|book| book.read_status).count();
    let read_percentage = if total > 0 {
        read as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    LibraryStats {
        total,
        read,
        unread: total - read,
        read_percentage,
    }
}
