//! Book record store contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the ordered book sequence of one library session.
//! - Provide the only mutation paths: append, first-match removal and
//!   whole-store replacement.
//!
//! # Invariants
//! - Store order is insertion order; nothing here reorders records.
//! - Title matching is case-insensitive and always hits the first match.
//! - `snapshot()` hands out copies; readers cannot mutate the store.

use crate::model::book::Book;

/// Record store interface for one library session.
pub trait BookRepository {
    /// Adds `book` at the end of the store. Callers validate beforehand.
    fn append(&mut self, book: Book);
    /// Removes the first book whose title matches case-insensitively.
    ///
    /// Returns the removed record, or `None` when no title matched.
    fn remove_first_matching(&mut self, title: &str) -> Option<Book>;
    /// Discards all current records and adopts `books` in their given order.
    fn replace_all(&mut self, books: Vec<Book>);
    /// Returns a copy of all records in store order.
    fn snapshot(&self) -> Vec<Book>;
    /// Returns the number of stored records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the first record whose title matches case-insensitively.
    fn find_first_by_title(&self, title: &str) -> Option<Book> {
        self.snapshot().into_iter().find(|book| book.has_title(title))
    }

    /// Returns all titles in store order, duplicates included.
    fn titles(&self) -> Vec<String> {
        self.snapshot().into_iter().map(|book| book.title).collect()
    }
}

/// Session-scoped record store backed by a `Vec`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookRepository {
    books: Vec<Book>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `books` in the given order.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self { books }
    }
}

impl BookRepository for InMemoryBookRepository {
    fn append(&mut self, book: Book) {
        self.books.push(book);
    }

    fn remove_first_matching(&mut self, title: &str) -> Option<Book> {
        let index = self.books.iter().position(|book| book.has_title(title))?;
        Some(self.books.remove(index))
    }

    fn replace_all(&mut self, books: Vec<Book>) {
        self.books = books;
    }

    fn snapshot(&self) -> Vec<Book> {
        self.books.clone()
    }

    fn len(&self) -> usize {
        self.books.len()
    }

    fn find_first_by_title(&self, title: &str) -> Option<Book> {
        self.books.iter().find(|book| book.has_title(title)).cloned()
    }

    fn titles(&self) -> Vec<String> {
        self.books.iter().map(|book| book.title.clone()).collect()
    }
}
