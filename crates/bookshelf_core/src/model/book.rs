//! Book domain model.
//!
//! # Responsibility
//! - Define the canonical book record held by a library session.
//! - Validate user drafts before a record enters the store.
//!
//! # Invariants
//! - `added_date` is stamped once at construction and never recomputed.
//! - A constructed book has non-blank `title`/`author` and `year` in
//!   `[0, current_year]`.
//! - `genre` is always one of the closed [`Genre`] values.

use chrono::{Datelike, Local, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// `chrono` format used for `added_date` (`YYYY-MM-DD HH:MM:SS`).
pub const ADDED_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

static ADDED_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").expect("valid added_date regex")
});

/// Returns whether `value` has the `YYYY-MM-DD HH:MM:SS` shape.
pub fn is_added_date_format(value: &str) -> bool {
    ADDED_DATE_RE.is_match(value)
}

/// Closed set of genres a book can be filed under.
///
/// Serialized by display label, e.g. `"Science Fiction"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    #[default]
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
    #[serde(rename = "Science Fiction")]
    ScienceFiction,
    Fantasy,
    Mystery,
    Thriller,
    Romance,
    Biography,
    History,
    #[serde(rename = "Self-Help")]
    SelfHelp,
    Psychology,
    #[serde(rename = "Computer Science")]
    ComputerScience,
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "Machine Learning")]
    MachineLearning,
    #[serde(rename = "Deep Learning")]
    DeepLearning,
    #[serde(rename = "Artificial Intelligence")]
    ArtificialIntelligence,
    Business,
    Economics,
    Finance,
    Marketing,
    Management,
    Other,
}

impl Genre {
    /// All genres in form order.
    pub const ALL: [Genre; 22] = [
        Genre::Fiction,
        Genre::NonFiction,
        Genre::ScienceFiction,
        Genre::Fantasy,
        Genre::Mystery,
        Genre::Thriller,
        Genre::Romance,
        Genre::Biography,
        Genre::History,
        Genre::SelfHelp,
        Genre::Psychology,
        Genre::ComputerScience,
        Genre::DataScience,
        Genre::MachineLearning,
        Genre::DeepLearning,
        Genre::ArtificialIntelligence,
        Genre::Business,
        Genre::Economics,
        Genre::Finance,
        Genre::Marketing,
        Genre::Management,
        Genre::Other,
    ];

    /// Human-readable label, identical to the persisted value.
    pub fn label(self) -> &'static str {
        match self {
            Genre::Fiction => "Fiction",
            Genre::NonFiction => "Non-Fiction",
            Genre::ScienceFiction => "Science Fiction",
            Genre::Fantasy => "Fantasy",
            Genre::Mystery => "Mystery",
            Genre::Thriller => "Thriller",
            Genre::Romance => "Romance",
            Genre::Biography => "Biography",
            Genre::History => "History",
            Genre::SelfHelp => "Self-Help",
            Genre::Psychology => "Psychology",
            Genre::ComputerScience => "Computer Science",
            Genre::DataScience => "Data Science",
            Genre::MachineLearning => "Machine Learning",
            Genre::DeepLearning => "Deep Learning",
            Genre::ArtificialIntelligence => "Artificial Intelligence",
            Genre::Business => "Business",
            Genre::Economics => "Economics",
            Genre::Finance => "Finance",
            Genre::Marketing => "Marketing",
            Genre::Management => "Management",
            Genre::Other => "Other",
        }
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Genre {
    type Err = BookValidationError;

    /// Parses a genre label case-insensitively; `-`, `_` and spaces are
    /// interchangeable (`science-fiction`, `Self Help`).
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_genre_text(value);
        Genre::ALL
            .into_iter()
            .find(|genre| normalize_genre_text(genre.label()) == wanted)
            .ok_or_else(|| BookValidationError::UnknownGenre(value.trim().to_string()))
    }
}

fn normalize_genre_text(value: &str) -> String {
    value
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Add-form field that must be filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Title,
    Author,
    Year,
}

impl Display for RequiredField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Title => f.write_str("title"),
            Self::Author => f.write_str("author"),
            Self::Year => f.write_str("year"),
        }
    }
}

/// Validation failure raised before a record touches the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    MissingField(RequiredField),
    YearOutOfRange { year: i32, max: i32 },
    UnknownGenre(String),
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field `{field}` is missing"),
            Self::YearOutOfRange { year, max } => {
                write!(f, "publication year {year} must be between 0 and {max}")
            }
            Self::UnknownGenre(value) => write!(f, "unknown genre `{value}`"),
        }
    }
}

impl Error for BookValidationError {}

/// Unvalidated Add input as collected by a form.
///
/// `genre` holds the raw genre text and `read_status` carries a default;
/// the other fields may be blank until [`Book::from_draft`] checks them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub year: Option<i32>,
    pub genre: String,
    pub read_status: bool,
}

impl Default for BookDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            year: None,
            genre: Genre::default().label().to_string(),
            read_status: false,
        }
    }
}

impl BookDraft {
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: Some(year),
            ..Self::default()
        }
    }

    pub fn with_genre(mut self, genre: Genre) -> Self {
        self.genre = genre.label().to_string();
        self
    }

    /// Sets the genre from free text; it is parsed during validation.
    pub fn with_genre_text(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn with_read_status(mut self, read_status: bool) -> Self {
        self.read_status = read_status;
        self
    }

    /// Checks required fields, the year bound relative to `now` and the
    /// genre text, in that order.
    ///
    /// Returns the checked publication year and genre.
    pub fn validate_at(&self, now: NaiveDateTime) -> Result<(i32, Genre), BookValidationError> {
        if self.title.trim().is_empty() {
            return Err(BookValidationError::MissingField(RequiredField::Title));
        }
        if self.author.trim().is_empty() {
            return Err(BookValidationError::MissingField(RequiredField::Author));
        }
        let year = self
            .year
            .ok_or(BookValidationError::MissingField(RequiredField::Year))?;
        let max = now.year();
        if !(0..=max).contains(&year) {
            return Err(BookValidationError::YearOutOfRange { year, max });
        }
        let genre = self.genre.parse::<Genre>()?;
        Ok((year, genre))
    }
}

/// Canonical book record, persisted verbatim as one JSON array element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: Genre,
    pub read_status: bool,
    /// Local creation time, `YYYY-MM-DD HH:MM:SS`.
    pub added_date: String,
}

impl Book {
    /// Validates `draft` and stamps `added_date` with the current local time.
    pub fn from_draft(draft: BookDraft) -> Result<Self, BookValidationError> {
        Self::from_draft_at(draft, Local::now().naive_local())
    }

    /// Same as [`Book::from_draft`] with an explicit clock reading.
    pub fn from_draft_at(
        draft: BookDraft,
        now: NaiveDateTime,
    ) -> Result<Self, BookValidationError> {
        let (year, genre) = draft.validate_at(now)?;
        Ok(Self {
            title: draft.title.trim().to_string(),
            author: draft.author.trim().to_string(),
            year,
            genre,
            read_status: draft.read_status,
            added_date: now.format(ADDED_DATE_FORMAT).to_string(),
        })
    }

    /// Case-insensitive title identity used by remove and exact lookups.
    ///
    /// Surrounding whitespace is ignored on both sides, matching the
    /// trimming applied on add.
    pub fn has_title(&self, title: &str) -> bool {
        self.title.trim().to_lowercase() == title.trim().to_lowercase()
    }
}
