//! Shell command grammar.
//!
//! # Responsibility
//! - Tokenize one input line and parse it into a shell command.
//! - Map library commands onto core `LibraryAction` values.
//!
//! # Invariants
//! - Missing add fields and genre text reach the core unchecked so that
//!   validation, not the parser, reports them.

use bookshelf_core::{BookDraft, Genre, LibraryAction, SearchField, SearchQuery, SortKey};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "", no_binary_name = true)]
pub struct ShellCli {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ShellCommand {
    /// Adds a book. Title, author and year are required.
    Add {
        title: Option<String>,
        author: Option<String>,
        #[arg(allow_negative_numbers = true)]
        year: Option<i32>,
        /// One of the genres listed by `genres`.
        #[arg(long, short, default_value_t = Genre::Fiction.to_string())]
        genre: String,
        /// Marks the book as already read.
        #[arg(long, short)]
        read: bool,
    },

    /// Removes the first book with the given title (case-insensitive).
    Remove { title: String },

    /// Searches books by title, author or genre.
    Search {
        #[arg(default_value = "")]
        term: String,
        #[arg(long, short, default_value_t = SearchField::Title)]
        by: SearchField,
    },

    /// Lists all books.
    List {
        /// recently-added, title, author or year.
        #[arg(long, short, default_value_t = SortKey::AddedDate)]
        sort: SortKey,
        /// Flips the sort order.
        #[arg(long, short)]
        reverse: bool,
    },

    /// Shows read/unread statistics.
    Stats,

    /// Saves the library, replacing the file.
    Save { file: Option<PathBuf> },

    /// Loads a library, replacing the current one.
    Load { file: Option<PathBuf> },

    /// Shows the titles currently in the library.
    Titles,

    /// Shows the available genres.
    Genres,

    /// Close this program.
    Exit,
}

impl ShellCommand {
    /// Converts library commands into core actions.
    ///
    /// Returns `None` for shell-only commands (`titles`, `genres`, `exit`).
    pub fn into_action(self, default_file: &Path) -> Option<LibraryAction> {
        let action = match self {
            Self::Add {
                title,
                author,
                year,
                genre,
                read,
            } => LibraryAction::Add(BookDraft {
                title: title.unwrap_or_default(),
                author: author.unwrap_or_default(),
                year,
                genre,
                read_status: read,
            }),
            Self::Remove { title } => LibraryAction::Remove { title },
            Self::Search { term, by } => LibraryAction::Search(SearchQuery::new(term).by(by)),
            Self::List { sort, reverse } => LibraryAction::List {
                sort_by: sort,
                reverse,
            },
            Self::Stats => LibraryAction::Stats,
            Self::Save { file } => LibraryAction::Save {
                path: file.unwrap_or_else(|| default_file.to_path_buf()),
            },
            Self::Load { file } => LibraryAction::Load {
                path: file.unwrap_or_else(|| default_file.to_path_buf()),
            },
            Self::Titles | Self::Genres | Self::Exit => return None,
        };
        Some(action)
    }
}

/// Parses one shell line. Returns `Ok(None)` for blank input.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, clap::Error> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let args =
        shlex::split(line).unwrap_or_else(|| line.split_whitespace().map(String::from).collect());
    ShellCli::try_parse_from(args).map(|cli| Some(cli.command))
}
