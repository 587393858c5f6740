//! Core domain logic for Bookshelf, a personal library catalog.
//! This crate is the single source of truth for library invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod persist;
pub mod repo;
pub mod search;
pub mod service;
pub mod stats;

pub use config::LibraryConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::book::{
    is_added_date_format, Book, BookDraft, BookValidationError, Genre, RequiredField,
    ADDED_DATE_FORMAT,
};
pub use persist::{load_library, save_library, PersistError, PersistResult, DEFAULT_LIBRARY_FILE};
pub use repo::book_repo::{BookRepository, InMemoryBookRepository};
pub use search::query::{
    search, sort_for_display, QueryParseError, SearchField, SearchQuery, SortKey,
};
pub use service::action::{ActionPayload, ActionResponse, LibraryAction, Notice, NoticeLevel};
pub use service::library_service::{LibraryService, ServiceError, ServiceResult};
pub use stats::summary::{compute as compute_stats, LibraryStats};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
