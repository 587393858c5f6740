//! Tagged user actions and their single dispatch point.
//!
//! # Responsibility
//! - Model every user interaction as one [`LibraryAction`] variant.
//! - Convert each outcome, failures included, into a user-facing
//!   [`ActionResponse`].
//!
//! # Invariants
//! - `dispatch` never fails and never panics on user input; the session
//!   stays usable after any action.
//! - Blank search terms are not sent to the query engine.

use crate::model::book::{Book, BookDraft, BookValidationError};
use crate::repo::book_repo::BookRepository;
use crate::search::query::{SearchQuery, SortKey};
use crate::service::library_service::{LibraryService, ServiceError};
use crate::stats::summary::LibraryStats;
use log::info;
use std::path::PathBuf;
use std::time::Instant;

const EMPTY_LIBRARY_MESSAGE: &str = "Your library is empty. Add some books first!";

/// One user interaction routed into the core.
#[derive(Debug, Clone, PartialEq)]
pub enum LibraryAction {
    Add(BookDraft),
    Remove { title: String },
    Search(SearchQuery),
    List { sort_by: SortKey, reverse: bool },
    Stats,
    Save { path: PathBuf },
    Load { path: PathBuf },
}

impl LibraryAction {
    /// Stable action name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Remove { .. } => "remove",
            Self::Search(_) => "search",
            Self::List { .. } => "list",
            Self::Stats => "stats",
            Self::Save { .. } => "save",
            Self::Load { .. } => "load",
        }
    }
}

/// Severity of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Message shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Data produced by an action, if any.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionPayload {
    None,
    Added(Book),
    Books(Vec<Book>),
    Stats(LibraryStats),
}

/// Response envelope returned by [`LibraryService::dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub struct ActionResponse {
    pub notice: Notice,
    pub payload: ActionPayload,
}

impl ActionResponse {
    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            notice: Notice {
                level,
                message: message.into(),
            },
            payload: ActionPayload::None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    pub fn with_payload(mut self, payload: ActionPayload) -> Self {
        self.payload = payload;
        self
    }

    pub fn level(&self) -> NoticeLevel {
        self.notice.level
    }

    pub fn message(&self) -> &str {
        &self.notice.message
    }
}

impl<R: BookRepository> LibraryService<R> {
    /// Runs one action to completion and describes its outcome.
    pub fn dispatch(&mut self, action: LibraryAction) -> ActionResponse {
        let started_at = Instant::now();
        let name = action.name();

        let response = match action {
            LibraryAction::Add(draft) => self.handle_add(draft),
            LibraryAction::Remove { title } => self.handle_remove(&title),
            LibraryAction::Search(query) => self.handle_search(&query),
            LibraryAction::List { sort_by, reverse } => self.handle_list(sort_by, reverse),
            LibraryAction::Stats => self.handle_stats(),
            LibraryAction::Save { path } => self.handle_save(path),
            LibraryAction::Load { path } => self.handle_load(path),
        };

        info!(
            "event=action_dispatch module=service action={} status={} books={} duration_ms={}",
            name,
            response.level().as_str(),
            self.len(),
            started_at.elapsed().as_millis()
        );
        response
    }

    fn handle_add(&mut self, draft: BookDraft) -> ActionResponse {
        match self.add_book(draft) {
            Ok(book) => {
                ActionResponse::success(format!("Book '{}' added successfully!", book.title))
                    .with_payload(ActionPayload::Added(book))
            }
            Err(err) => ActionResponse::warning(validation_message(&err)),
        }
    }

    fn handle_remove(&mut self, title: &str) -> ActionResponse {
        match self.remove_book(title) {
            Some(_) => ActionResponse::success(format!("Book '{title}' removed successfully!")),
            None => ActionResponse::warning(format!("Book '{title}' not found in the library.")),
        }
    }

    fn handle_search(&self, query: &SearchQuery) -> ActionResponse {
        if query.term.trim().is_empty() {
            return ActionResponse::info(format!("Enter a {} to search.", query.field));
        }

        let results = self.search(query);
        if results.is_empty() {
            return ActionResponse::warning("No books found matching your search.");
        }
        ActionResponse::success(format!("Found {} book(s):", results.len()))
            .with_payload(ActionPayload::Books(results))
    }

    fn handle_list(&self, sort_by: SortKey, reverse: bool) -> ActionResponse {
        if self.is_empty() {
            return ActionResponse::info(EMPTY_LIBRARY_MESSAGE);
        }
        ActionResponse::info(format!("Total books: {}", self.len()))
            .with_payload(ActionPayload::Books(self.list(sort_by, reverse)))
    }

    fn handle_stats(&self) -> ActionResponse {
        let stats = self.stats();
        let response = if stats.total == 0 {
            ActionResponse::info("Your library is empty. Add some books first to see statistics!")
        } else {
            ActionResponse::info("Library Statistics")
        };
        response.with_payload(ActionPayload::Stats(stats))
    }

    fn handle_save(&self, path: PathBuf) -> ActionResponse {
        match self.save(&path) {
            Ok(()) => ActionResponse::success(format!(
                "Library saved successfully to {}!",
                path.display()
            )),
            Err(err) => ActionResponse::error(format!("Error saving library: {err}")),
        }
    }

    fn handle_load(&mut self, path: PathBuf) -> ActionResponse {
        match self.load(&path) {
            Ok(_) => ActionResponse::success(format!(
                "Library loaded successfully from {}!",
                path.display()
            )),
            Err(ServiceError::Persist(err)) if err.is_not_found() => {
                ActionResponse::warning(format!("No saved library found at {}", path.display()))
            }
            Err(err) => ActionResponse::error(format!("Error loading library: {err}")),
        }
    }
}

fn validation_message(err: &BookValidationError) -> String {
    match err {
        BookValidationError::MissingField(_) => {
            "Please fill in all required fields (title, author, year).".to_string()
        }
        BookValidationError::YearOutOfRange { year, max } => {
            format!("Publication year {year} must be between 0 and {max}.")
        }
        BookValidationError::UnknownGenre(value) => format!("Unknown genre '{value}'."),
    }
}
