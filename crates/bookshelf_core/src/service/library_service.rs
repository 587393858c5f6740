//! Library use-case service.
//!
//! # Responsibility
//! - Provide typed entry points for add/remove/search/list/stats/save/load.
//! - Own the session record store for its whole lifetime.
//!
//! # Invariants
//! - Validation runs before the store is touched.
//! - A failed load or save never changes the store.
//! - Display sorting and searching work on snapshots.

use crate::model::book::{Book, BookDraft, BookValidationError};
use crate::persist::{load_library, save_library, PersistError};
use crate::repo::book_repo::{BookRepository, InMemoryBookRepository};
use crate::search::query::{search, sort_for_display, SearchQuery, SortKey};
use crate::stats::summary::{compute, LibraryStats};
use chrono::{Local, NaiveDateTime};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure of a library use-case that touches storage.
#[derive(Debug)]
pub enum ServiceError {
    Persist(PersistError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Persist(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Persist(err) => Some(err),
        }
    }
}

impl From<PersistError> for ServiceError {
    fn from(value: PersistError) -> Self {
        Self::Persist(value)
    }
}

/// One library session: the record store plus the operations over it.
pub struct LibraryService<R: BookRepository> {
    repo: R,
}

impl LibraryService<InMemoryBookRepository> {
    /// Starts a session over an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(InMemoryBookRepository::new())
    }
}

impl<R: BookRepository> LibraryService<R> {
    /// Creates a service using the provided store implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Read access to the underlying store.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Validates `draft`, stamps it with the current time and appends it.
    pub fn add_book(&mut self, draft: BookDraft) -> Result<Book, BookValidationError> {
        self.add_book_at(draft, Local::now().naive_local())
    }

    /// Same as [`LibraryService::add_book`] with an explicit clock reading.
    pub fn add_book_at(
        &mut self,
        draft: BookDraft,
        now: NaiveDateTime,
    ) -> Result<Book, BookValidationError> {
        let book = match Book::from_draft_at(draft, now) {
            Ok(book) => book,
            Err(err) => {
                warn!("event=book_add module=service status=rejected reason={err}");
                return Err(err);
            }
        };
        self.repo.append(book.clone());
        info!(
            "event=book_add module=service status=ok books={}",
            self.repo.len()
        );
        Ok(book)
    }

    /// Removes the first book whose title matches case-insensitively.
    ///
    /// Returns `None` and leaves the store untouched when nothing matched.
    pub fn remove_book(&mut self, title: &str) -> Option<Book> {
        let removed = self.repo.remove_first_matching(title);
        info!(
            "event=book_remove module=service status={} books={}",
            if removed.is_some() { "ok" } else { "not_found" },
            self.repo.len()
        );
        removed
    }

    /// Returns matching books in store order.
    pub fn search(&self, query: &SearchQuery) -> Vec<Book> {
        search(&self.repo.snapshot(), query)
    }

    /// Returns all books ordered for display; the store keeps its order.
    pub fn list(&self, sort_by: SortKey, reverse: bool) -> Vec<Book> {
        sort_for_display(&self.repo.snapshot(), sort_by, reverse)
    }

    /// Returns all books in store order.
    pub fn books(&self) -> Vec<Book> {
        self.repo.snapshot()
    }

    pub fn titles(&self) -> Vec<String> {
        self.repo.titles()
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    pub fn stats(&self) -> LibraryStats {
        compute(&self.repo.snapshot())
    }

    /// Writes the whole library to `path`, replacing the file.
    pub fn save(&self, path: impl AsRef<Path>) -> ServiceResult<()> {
        save_library(path, &self.repo.snapshot())?;
        Ok(())
    }

    /// Replaces the whole library with the content of `path`.
    ///
    /// Returns the number of loaded books. On any error the current
    /// library is kept as it was.
    pub fn load(&mut self, path: impl AsRef<Path>) -> ServiceResult<usize> {
        let books = load_library(path)?;
        let count = books.len();
        self.repo.replace_all(books);
        Ok(count)
    }
}
