//! Linear search and display sorting over a record snapshot.
//!
//! # Responsibility
//! - Filter records by case-insensitive substring on one field.
//! - Produce sorted display copies without touching store order.
//!
//! # Invariants
//! - Results keep store order unless a sort is explicitly applied.
//! - Sorting is stable in both directions: ties keep store order.
//! - "Recently Added" runs newest-first when `reverse` is off; the other
//!   keys run ascending when `reverse` is off.

use crate::model::book::Book;
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Field a search term is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchField {
    #[default]
    Title,
    Author,
    Genre,
}

impl SearchField {
    pub const ALL: [SearchField; 3] = [SearchField::Title, SearchField::Author, SearchField::Genre];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Genre => "genre",
        }
    }

    fn value_of(self, book: &Book) -> &str {
        match self {
            Self::Title => &book.title,
            Self::Author => &book.author,
            Self::Genre => book.genre.label(),
        }
    }
}

impl Display for SearchField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = QueryParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "genre" => Ok(Self::Genre),
            _ => Err(QueryParseError::UnknownSearchField(value.to_string())),
        }
    }
}

/// Key used to order records for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Order by `added_date` ("Recently Added").
    #[default]
    AddedDate,
    Title,
    Author,
    Year,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::AddedDate,
        SortKey::Title,
        SortKey::Author,
        SortKey::Year,
    ];

    /// Label shown in sort pickers.
    pub fn label(self) -> &'static str {
        match self {
            Self::AddedDate => "Recently Added",
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Year => "Year",
        }
    }

    fn compare(self, left: &Book, right: &Book) -> Ordering {
        match self {
            Self::AddedDate => left.added_date.cmp(&right.added_date),
            Self::Title => left.title.to_lowercase().cmp(&right.title.to_lowercase()),
            Self::Author => left.author.to_lowercase().cmp(&right.author.to_lowercase()),
            Self::Year => left.year.cmp(&right.year),
        }
    }

    /// Whether the effective order is descending for the given toggle.
    fn is_descending(self, reverse: bool) -> bool {
        match self {
            Self::AddedDate => !reverse,
            Self::Title | Self::Author | Self::Year => reverse,
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortKey {
    type Err = QueryParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "recently_added" | "recent" | "added" | "added_date" => Ok(Self::AddedDate),
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "year" => Ok(Self::Year),
            _ => Err(QueryParseError::UnknownSortKey(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryParseError {
    UnknownSearchField(String),
    UnknownSortKey(String),
}

impl Display for QueryParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSearchField(value) => {
                write!(f, "unknown search field `{value}`; expected title|author|genre")
            }
            Self::UnknownSortKey(value) => write!(
                f,
                "unknown sort key `{value}`; expected recently-added|title|author|year"
            ),
        }
    }
}

impl Error for QueryParseError {}

/// Search options for substring matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Substring to look for; matching ignores case.
    pub term: String,
    pub field: SearchField,
}

impl SearchQuery {
    /// Creates a title search for `term`.
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            field: SearchField::Title,
        }
    }

    pub fn by(mut self, field: SearchField) -> Self {
        self.field = field;
        self
    }
}

/// Returns the records whose chosen field contains the query term.
///
/// An empty term matches every record; deciding whether to search blank
/// input is up to the caller.
pub fn search(books: &[Book], query: &SearchQuery) -> Vec<Book> {
    let needle = query.term.to_lowercase();
    books
        .iter()
        .filter(|book| query.field.value_of(book).to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Returns a sorted copy of `books` for display.
pub fn sort_for_display(books: &[Book], key: SortKey, reverse: bool) -> Vec<Book> {
    let mut sorted = books.to_vec();
    if key.is_descending(reverse) {
        sorted.sort_by(|left, right| key.compare(right, left));
    } else {
        sorted.sort_by(|left, right| key.compare(left, right));
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::{SearchField, SortKey};

    #[test]
    fn sort_key_parses_aliases() {
        assert_eq!("Recently Added".parse::<SortKey>().unwrap(), SortKey::AddedDate);
        assert_eq!("added-date".parse::<SortKey>().unwrap(), SortKey::AddedDate);
        assert_eq!("YEAR".parse::<SortKey>().unwrap(), SortKey::Year);
        assert!("pages".parse::<SortKey>().is_err());
    }

    #[test]
    fn search_field_rejects_unknown_values() {
        assert_eq!(" Author ".parse::<SearchField>().unwrap(), SearchField::Author);
        let err = "isbn".parse::<SearchField>().unwrap_err();
        assert!(err.to_string().contains("isbn"));
    }

    #[test]
    fn recently_added_polarity_is_inverted() {
        assert!(SortKey::AddedDate.is_descending(false));
        assert!(!SortKey::AddedDate.is_descending(true));
        assert!(!SortKey::Year.is_descending(false));
        assert!(SortKey::Title.is_descending(true));
    }
}
