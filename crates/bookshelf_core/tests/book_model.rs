use bookshelf_core::{
    is_added_date_format, Book, BookDraft, BookValidationError, Genre, RequiredField,
};
use chrono::{NaiveDate, NaiveDateTime};

#[test]
fn from_draft_stamps_added_date_and_trims_text() {
    let draft = BookDraft::new("  Dune ", " Frank Herbert", 1965).with_genre(Genre::ScienceFiction);
    let book = Book::from_draft_at(draft, at(2024, 3, 1, 9, 5, 7)).unwrap();

    assert_eq!(book.title, "Dune");
    assert_eq!(book.author, "Frank Herbert");
    assert_eq!(book.year, 1965);
    assert_eq!(book.genre, Genre::ScienceFiction);
    assert!(!book.read_status);
    assert_eq!(book.added_date, "2024-03-01 09:05:07");
}

#[test]
fn from_draft_with_wall_clock_uses_timestamp_format() {
    let book = Book::from_draft(BookDraft::new("Emma", "Jane Austen", 1815)).unwrap();
    assert!(is_added_date_format(&book.added_date), "{}", book.added_date);
}

#[test]
fn draft_defaults_match_form_defaults() {
    let draft = BookDraft::default();
    assert_eq!(draft.genre, Genre::Fiction.label());
    assert!(!draft.read_status);
    assert_eq!(draft.year, None);
}

#[test]
fn missing_required_fields_are_rejected_in_form_order() {
    let now = at(2024, 1, 1, 0, 0, 0);

    let err = Book::from_draft_at(BookDraft::new("   ", "Someone", 2000), now).unwrap_err();
    assert_eq!(err, BookValidationError::MissingField(RequiredField::Title));

    let err = Book::from_draft_at(BookDraft::new("Title", "", 2000), now).unwrap_err();
    assert_eq!(err, BookValidationError::MissingField(RequiredField::Author));

    let draft = BookDraft {
        title: "Title".to_string(),
        author: "Author".to_string(),
        ..BookDraft::default()
    };
    let err = Book::from_draft_at(draft, now).unwrap_err();
    assert_eq!(err, BookValidationError::MissingField(RequiredField::Year));
}

#[test]
fn year_must_lie_between_zero_and_current_year() {
    let now = at(2024, 6, 30, 12, 0, 0);

    assert!(Book::from_draft_at(BookDraft::new("Old", "Anon", 0), now).is_ok());
    assert!(Book::from_draft_at(BookDraft::new("New", "Anon", 2024), now).is_ok());

    let err = Book::from_draft_at(BookDraft::new("Future", "Anon", 2025), now).unwrap_err();
    assert_eq!(
        err,
        BookValidationError::YearOutOfRange {
            year: 2025,
            max: 2024
        }
    );

    let err = Book::from_draft_at(BookDraft::new("Negative", "Anon", -1), now).unwrap_err();
    assert!(err.to_string().contains("between 0 and 2024"));
}

#[test]
fn genre_parses_labels_case_insensitively() {
    assert_eq!("science fiction".parse::<Genre>().unwrap(), Genre::ScienceFiction);
    assert_eq!("NON-FICTION".parse::<Genre>().unwrap(), Genre::NonFiction);
    assert_eq!("self help".parse::<Genre>().unwrap(), Genre::SelfHelp);
    assert_eq!(
        "Poetry".parse::<Genre>().unwrap_err(),
        BookValidationError::UnknownGenre("Poetry".to_string())
    );
    assert_eq!(Genre::ALL.len(), 22);
    assert_eq!(Genre::ALL.last(), Some(&Genre::Other));
}

#[test]
fn book_serialization_uses_expected_wire_fields() {
    let draft = BookDraft::new("Deep Learning", "Ian Goodfellow", 2016)
        .with_genre(Genre::DeepLearning)
        .with_read_status(true);
    let book = Book::from_draft_at(draft, at(2023, 12, 24, 18, 30, 0)).unwrap();

    let json = serde_json::to_value(&book).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "title": "Deep Learning",
            "author": "Ian Goodfellow",
            "year": 2016,
            "genre": "Deep Learning",
            "read_status": true,
            "added_date": "2023-12-24 18:30:00"
        })
    );

    let decoded: Book = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, book);
}

#[test]
fn deserialize_rejects_unknown_genre_label() {
    let value = serde_json::json!({
        "title": "Leaves of Grass",
        "author": "Walt Whitman",
        "year": 1855,
        "genre": "Poetry",
        "read_status": false,
        "added_date": "2024-01-01 00:00:00"
    });
    assert!(serde_json::from_value::<Book>(value).is_err());
}

#[test]
fn title_identity_ignores_case() {
    let draft = BookDraft::new("Dune", "Frank Herbert", 1965);
    let book = Book::from_draft_at(draft, at(2024, 1, 1, 0, 0, 0)).unwrap();
    assert!(book.has_title("DUNE"));
    assert!(book.has_title("dune"));
    assert!(!book.has_title("dun"));
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, second)
        .unwrap()
}
