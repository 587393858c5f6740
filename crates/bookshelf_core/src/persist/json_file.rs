//! Whole-file JSON save/load.
//!
//! # Responsibility
//! - Serialize the full ordered record list as one JSON array.
//! - Decode a JSON array back into typed records.
//!
//! # Invariants
//! - A failed save leaves any existing target file untouched.
//! - Emitted log events carry paths, counts and durations only.

use super::{PersistError, PersistResult};
use crate::model::book::{is_added_date_format, Book};
use log::{error, info, warn};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tempfile::NamedTempFile;

/// Writes `books` to `path` as a pretty-printed JSON array.
///
/// The document is written to a temporary file next to `path` and renamed
/// over it, so the target either keeps its old content or gets the new one.
///
/// # Errors
/// - [`PersistError::Io`] when the directory cannot host the temporary file
///   or the rename fails (missing directory, permissions, path is a
///   directory).
pub fn save_library(path: impl AsRef<Path>, books: &[Book]) -> PersistResult<()> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!(
        "event=library_save module=persist status=start books={}",
        books.len()
    );

    match write_atomically(path, books) {
        Ok(()) => {
            info!(
                "event=library_save module=persist status=ok path={} books={} duration_ms={}",
                path.display(),
                books.len(),
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=library_save module=persist status=error path={} duration_ms={} error_code=save_failed error={}",
                path.display(),
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Reads the JSON array stored at `path`.
///
/// The returned list is complete; callers replace their store with it.
///
/// # Errors
/// - [`PersistError::NotFound`] when `path` does not exist.
/// - [`PersistError::Parse`] when the content is not an array of records.
/// - [`PersistError::Io`] for any other read failure.
pub fn load_library(path: impl AsRef<Path>) -> PersistResult<Vec<Book>> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=library_load module=persist status=start");

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!(
                "event=library_load module=persist status=not_found path={}",
                path.display()
            );
            return Err(PersistError::NotFound(path.to_path_buf()));
        }
        Err(source) => {
            error!(
                "event=library_load module=persist status=error path={} error_code=read_failed error={}",
                path.display(),
                source
            );
            return Err(PersistError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    match serde_json::from_str::<Vec<Book>>(&content) {
        Ok(books) => {
            let malformed = count_malformed_added_dates(&books);
            if malformed > 0 {
                warn!(
                    "event=library_load module=persist status=degraded path={} malformed_added_dates={}",
                    path.display(),
                    malformed
                );
            }
            info!(
                "event=library_load module=persist status=ok path={} books={} duration_ms={}",
                path.display(),
                books.len(),
                started_at.elapsed().as_millis()
            );
            Ok(books)
        }
        Err(source) => {
            error!(
                "event=library_load module=persist status=error path={} error_code=parse_failed line={} column={}",
                path.display(),
                source.line(),
                source.column()
            );
            Err(PersistError::Parse {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

fn write_atomically(path: &Path, books: &[Book]) -> PersistResult<()> {
    let io_error = |source: io::Error| PersistError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut temp = NamedTempFile::new_in(target_dir(path)).map_err(io_error)?;
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        serde_json::to_writer_pretty(&mut writer, books)
            .map_err(|err| io_error(io::Error::from(err)))?;
        writer.write_all(b"\n").map_err(io_error)?;
        writer.flush().map_err(io_error)?;
    }
    temp.as_file().sync_all().map_err(io_error)?;
    temp.persist(path).map_err(|err| io_error(err.error))?;
    Ok(())
}

/// Counts records whose `added_date` lacks the `YYYY-MM-DD HH:MM:SS` shape.
fn count_malformed_added_dates(books: &[Book]) -> usize {
    books
        .iter()
        .filter(|book| !is_added_date_format(&book.added_date))
        .count()
}

fn target_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(test)]
mod tests {
    use super::{count_malformed_added_dates, target_dir};
    use crate::model::book::{Book, Genre};
    use std::path::Path;

    fn book_added(added_date: &str) -> Book {
        Book {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            year: 1965,
            genre: Genre::ScienceFiction,
            read_status: false,
            added_date: added_date.to_string(),
        }
    }

    #[test]
    fn malformed_added_dates_are_counted() {
        let books = vec![
            book_added("2024-01-01 10:00:00"),
            book_added("yesterday"),
            book_added("2024-01-01T10:00:00"),
        ];
        assert_eq!(count_malformed_added_dates(&books), 2);
        assert_eq!(count_malformed_added_dates(&books[..1]), 0);
    }

    #[test]
    fn bare_file_name_targets_current_dir() {
        assert_eq!(target_dir(Path::new("library.json")), Path::new("."));
    }

    #[test]
    fn nested_path_targets_its_parent() {
        assert_eq!(
            target_dir(Path::new("shelves/home/library.json")),
            Path::new("shelves/home")
        );
    }
}
