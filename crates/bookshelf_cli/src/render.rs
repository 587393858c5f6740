//! Plain-text rendering of action responses.

use bookshelf_core::{ActionPayload, ActionResponse, Book, LibraryStats, NoticeLevel};
use std::fmt::Write;

const PROGRESS_BAR_WIDTH: usize = 20;

/// Renders the notice line and payload; `detailed` selects the long book
/// form used by the library listing.
pub fn render_response(response: &ActionResponse, detailed: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        level_marker(response.level()),
        response.message()
    );

    match &response.payload {
        ActionPayload::None | ActionPayload::Added(_) => {}
        ActionPayload::Books(books) => {
            for book in books {
                if detailed {
                    out.push_str(&render_book_details(book));
                } else {
                    out.push_str(&render_book_summary(book));
                }
            }
        }
        ActionPayload::Stats(stats) if stats.total > 0 => out.push_str(&render_stats(stats)),
        ActionPayload::Stats(_) => {}
    }
    out
}

fn level_marker(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "[ok]",
        NoticeLevel::Info => "[info]",
        NoticeLevel::Warning => "[warn]",
        NoticeLevel::Error => "[error]",
    }
}

/// Short form used for search hits.
pub fn render_book_summary(book: &Book) -> String {
    format!(
        "{} by {} ({})\n  Genre: {} | Read: {}\n---\n",
        book.title,
        book.author,
        book.year,
        book.genre,
        yes_no(book.read_status)
    )
}

/// Long form used by the library listing.
pub fn render_book_details(book: &Book) -> String {
    let mut out = format!("{} by {}\n", book.title, book.author);
    let _ = writeln!(out, "  Author: {}", book.author);
    let _ = writeln!(out, "  Year:   {}", book.year);
    let _ = writeln!(out, "  Genre:  {}", book.genre);
    let _ = writeln!(out, "  Read:   {}", yes_no(book.read_status));
    let _ = writeln!(out, "  Added:  {}", book.added_date);
    out
}

pub fn render_stats(stats: &LibraryStats) -> String {
    let filled = (stats.read_fraction() * PROGRESS_BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(PROGRESS_BAR_WIDTH);
    format!(
        "  Total Books:  {}\n  Books Read:   {}\n  Books Unread: {}\n  [{}{}]\n",
        stats.total,
        stats,
        stats.unread,
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::{render_response, render_stats};
    use bookshelf_core::{ActionPayload, ActionResponse, Book, Genre, LibraryStats};

    fn dune() -> Book {
        Book {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            year: 1965,
            genre: Genre::ScienceFiction,
            read_status: false,
            added_date: "2024-01-01 10:00:00".to_string(),
        }
    }

    #[test]
    fn search_hits_render_as_summaries() {
        let response = ActionResponse::success("Found 1 book(s):")
            .with_payload(ActionPayload::Books(vec![dune()]));
        let text = render_response(&response, false);
        assert!(text.starts_with("[ok] Found 1 book(s):\n"));
        assert!(text.contains("Dune by Frank Herbert (1965)"));
        assert!(text.contains("Genre: Science Fiction | Read: No"));
    }

    #[test]
    fn listing_renders_added_date() {
        let response =
            ActionResponse::info("Total books: 1").with_payload(ActionPayload::Books(vec![dune()]));
        let text = render_response(&response, true);
        assert!(text.contains("Added:  2024-01-01 10:00:00"));
    }

    #[test]
    fn stats_render_progress_bar() {
        let stats = LibraryStats {
            total: 2,
            read: 1,
            unread: 1,
            read_percentage: 50.0,
        };
        let text = render_stats(&stats);
        assert!(text.contains("Books Read:   1 (50.0%)"));
        assert!(text.contains("[##########----------]"));
    }

    #[test]
    fn warnings_render_without_payload() {
        let text = render_response(
            &ActionResponse::warning("Book 'x' not found in the library."),
            false,
        );
        assert_eq!(text, "[warn] Book 'x' not found in the library.\n");
    }
}
