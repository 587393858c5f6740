use bookshelf_core::{compute_stats, Book, Genre, LibraryStats};

#[test]
fn empty_library_yields_zeroes_without_dividing() {
    let stats = compute_stats(&[]);
    assert_eq!(
        stats,
        LibraryStats {
            total: 0,
            read: 0,
            unread: 0,
            read_percentage: 0.0,
        }
    );
    assert_eq!(stats.read_fraction(), 0.0);
}

#[test]
fn counts_read_and_unread_books() {
    let books = vec![
        book("Dune", true),
        book("Emma", false),
        book("Persuasion", true),
        book("Ulysses", false),
    ];

    let stats = compute_stats(&books);
    assert_eq!(stats.total, 4);
    assert_eq!(stats.read, 2);
    assert_eq!(stats.unread, 2);
    assert_eq!(stats.read_percentage, 50.0);
    assert_eq!(stats.to_string(), "2 (50.0%)");
}

#[test]
fn all_read_is_one_hundred_percent() {
    let stats = compute_stats(&[book("Dune", true)]);
    assert_eq!(stats.read_percentage, 100.0);
    assert_eq!(stats.unread, 0);
    assert_eq!(stats.read_fraction(), 1.0);
}

fn book(title: &str, read_status: bool) -> Book {
    Book {
        title: title.to_string(),
        author: "Author".to_string(),
        year: 1990,
        genre: Genre::Fiction,
        read_status,
        added_date: "2024-05-05 05:05:05".to_string(),
    }
}
