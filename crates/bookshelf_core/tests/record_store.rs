use bookshelf_core::{Book, BookRepository, Genre, InMemoryBookRepository};

#[test]
fn new_store_is_empty() {
    let repo = InMemoryBookRepository::new();
    assert!(repo.is_empty());
    assert_eq!(repo.len(), 0);
    assert!(repo.snapshot().is_empty());
    assert!(repo.titles().is_empty());
}

#[test]
fn append_keeps_insertion_order() {
    let mut repo = InMemoryBookRepository::new();
    repo.append(book("Dune", "2024-01-01 10:00:00"));
    repo.append(book("Emma", "2024-01-01 09:00:00"));
    repo.append(book("Anathem", "2024-01-01 11:00:00"));

    assert_eq!(repo.titles(), vec!["Dune", "Emma", "Anathem"]);
}

#[test]
fn remove_first_matching_ignores_case_and_hits_first_duplicate_only() {
    let mut repo = InMemoryBookRepository::new();
    repo.append(book("Dune", "2024-01-01 10:00:00"));
    repo.append(book("Emma", "2024-01-01 10:01:00"));
    repo.append(book("DUNE", "2024-01-01 10:02:00"));

    let removed = repo.remove_first_matching("dune").expect("dune should be removed");
    assert_eq!(removed.added_date, "2024-01-01 10:00:00");
    assert_eq!(repo.titles(), vec!["Emma", "DUNE"]);

    let removed = repo.remove_first_matching("Dune").expect("second copy should match");
    assert_eq!(removed.title, "DUNE");
    assert_eq!(repo.titles(), vec!["Emma"]);
}

#[test]
fn remove_missing_title_leaves_store_unchanged() {
    let mut repo = InMemoryBookRepository::new();
    repo.append(book("Dune", "2024-01-01 10:00:00"));
    repo.append(book("Emma", "2024-01-01 10:01:00"));
    let before = repo.snapshot();

    assert!(repo.remove_first_matching("Ulysses").is_none());
    assert!(repo.remove_first_matching("Dun").is_none());
    assert_eq!(repo.snapshot(), before);
}

#[test]
fn replace_all_discards_previous_contents() {
    let mut repo = InMemoryBookRepository::new();
    repo.append(book("Dune", "2024-01-01 10:00:00"));

    repo.replace_all(vec![
        book("Emma", "2024-01-01 10:01:00"),
        book("Persuasion", "2024-01-01 10:02:00"),
    ]);
    assert_eq!(repo.titles(), vec!["Emma", "Persuasion"]);

    repo.replace_all(Vec::new());
    assert!(repo.is_empty());
}

#[test]
fn snapshot_is_a_detached_copy() {
    let mut repo = InMemoryBookRepository::with_books(vec![book("Dune", "2024-01-01 10:00:00")]);

    let mut snapshot = repo.snapshot();
    snapshot.clear();
    assert_eq!(repo.len(), 1);

    repo.append(book("Emma", "2024-01-01 10:01:00"));
    assert!(snapshot.is_empty());
}

#[test]
fn find_first_by_title_returns_first_match() {
    let repo = InMemoryBookRepository::with_books(vec![
        book("Emma", "2024-01-01 10:00:00"),
        book("emma", "2024-01-01 10:05:00"),
    ]);

    let found = repo.find_first_by_title("EMMA").unwrap();
    assert_eq!(found.added_date, "2024-01-01 10:00:00");
    assert!(repo.find_first_by_title("Dune").is_none());
}

fn book(title: &str, added_date: &str) -> Book {
    Book {
        title: title.to_string(),
        author: "Author".to_string(),
        year: 2000,
        genre: Genre::Fiction,
        read_status: false,
        added_date: added_date.to_string(),
    }
}
