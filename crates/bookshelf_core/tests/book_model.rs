mod common;

use bookshelf_core::{BookRepository, BookValidationError, InMemoryBookRepository, NewBook};
use common::{new_book, ManualClock, SequenceIds};

#[test]
fn validate_checks_name_before_page_range() {
    let mut candidate = new_book("", 1, 5, false);
    assert_eq!(candidate.validate(), Err(BookValidationError::MissingName));

    candidate.name = Some("named".to_string());
    assert_eq!(
        candidate.validate(),
        Err(BookValidationError::InvalidPageRange {
            read_page: 5,
            page_count: 1,
        })
    );
}

#[test]
fn new_book_deserializes_camel_case_payload() {
    let value = serde_json::json!({
        "name": "Dicoding",
        "year": 2020,
        "author": "A",
        "summary": "S",
        "publisher": "P",
        "pageCount": 100,
        "readPage": 100,
        "reading": false
    });

    let candidate: NewBook = serde_json::from_value(value).unwrap();
    assert_eq!(candidate, new_book("Dicoding", 100, 100, false));
    assert!(candidate.is_finished());
}

#[test]
fn new_book_without_name_decodes_to_none() {
    let value = serde_json::json!({
        "year": 2020,
        "author": "A",
        "summary": "S",
        "publisher": "P",
        "pageCount": 10,
        "readPage": 1,
        "reading": true
    });

    let candidate: NewBook = serde_json::from_value(value).unwrap();
    assert_eq!(candidate.name, None);
    assert_eq!(candidate.validate(), Err(BookValidationError::MissingName));
}

#[test]
fn new_book_rejects_caller_supplied_derived_fields() {
    let value = serde_json::json!({
        "name": "Dicoding",
        "year": 2020,
        "author": "A",
        "summary": "S",
        "publisher": "P",
        "pageCount": 100,
        "readPage": 1,
        "reading": false,
        "finished": true
    });

    let err = serde_json::from_value::<NewBook>(value).unwrap_err();
    assert!(err.to_string().contains("finished"), "unexpected error: {err}");
}

#[test]
fn new_book_rejects_missing_required_fields() {
    let value = serde_json::json!({ "name": "Dicoding" });

    assert!(serde_json::from_value::<NewBook>(value).is_err());
}

#[test]
fn book_serialization_uses_expected_wire_fields() {
    let clock = ManualClock::new();
    let mut repo = InMemoryBookRepository::with_collaborators(SequenceIds::default(), &clock);
    let id = repo.insert_book(&new_book("Dicoding", 100, 100, true)).unwrap();
    let book = repo.get_book(&id).unwrap();

    let json = serde_json::to_value(&book).unwrap();
    assert_eq!(json["id"], "book-0001");
    assert_eq!(json["name"], "Dicoding");
    assert_eq!(json["year"], 2020);
    assert_eq!(json["pageCount"], 100);
    assert_eq!(json["readPage"], 100);
    assert_eq!(json["finished"], true);
    assert_eq!(json["reading"], true);
    assert_eq!(json["insertedAt"], "2026-10-19T08:30:00.000Z");
    assert_eq!(json["updatedAt"], json["insertedAt"]);
    assert_eq!(json.as_object().unwrap().len(), 12);
}

#[test]
fn summary_serializes_only_projection_fields() {
    let clock = ManualClock::new();
    let mut repo = InMemoryBookRepository::with_collaborators(SequenceIds::default(), &clock);
    let id = repo.insert_book(&new_book("Dicoding", 10, 1, false)).unwrap();

    let summary = repo.get_book(&id).unwrap().summary_view();
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(
        json,
        serde_json::json!({ "id": "book-0001", "name": "Dicoding", "publisher": "P" })
    );
}
