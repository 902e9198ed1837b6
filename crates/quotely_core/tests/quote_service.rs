use quotely_core::db::open_db_in_memory;
use quotely_core::{
    CycleDirection, Draft, QuoteService, QuoteServiceError, SortOrder, SqliteQuoteRepository,
    PALETTE,
};
use uuid::Uuid;

fn draft_with_text(text: &str) -> Draft {
    let mut draft = Draft::new();
    draft.text = text.to_string();
    draft
}

#[test]
fn save_draft_returns_stored_record() {
    let conn = open_db_in_memory().unwrap();
    let service = QuoteService::new(SqliteQuoteRepository::try_new(&conn).unwrap());

    let mut draft = draft_with_text("what you practice grows stronger");
    draft.note = "from this morning".to_string();
    draft.color_index = 2;

    let saved = service.save_draft(&draft).unwrap().unwrap();

    assert_eq!(saved.text, "what you practice grows stronger");
    assert_eq!(saved.note, "from this morning");
    assert_eq!(saved.color_index, 2);
    assert!(saved.created_at > 0);
    assert_eq!(service.count().unwrap(), 1);
}

#[test]
fn save_draft_with_empty_text_is_none_and_creates_nothing() {
    let conn = open_db_in_memory().unwrap();
    let service = QuoteService::new(SqliteQuoteRepository::try_new(&conn).unwrap());

    assert!(service.save_draft(&Draft::new()).unwrap().is_none());
    assert!(service
        .save_draft(&draft_with_text("  \n "))
        .unwrap()
        .is_none());
    assert_eq!(service.count().unwrap(), 0);
}

#[test]
fn each_save_creates_a_distinct_identity() {
    let conn = open_db_in_memory().unwrap();
    let service = QuoteService::new(SqliteQuoteRepository::try_new(&conn).unwrap());

    let first = service
        .save_draft(&draft_with_text("twice written"))
        .unwrap()
        .unwrap();
    let second = service
        .save_draft(&draft_with_text("twice written"))
        .unwrap()
        .unwrap();

    assert_ne!(first.uuid, second.uuid);
    assert_eq!(service.count().unwrap(), 2);
}

#[test]
fn update_text_rejects_empty_replacement() {
    let conn = open_db_in_memory().unwrap();
    let service = QuoteService::new(SqliteQuoteRepository::try_new(&conn).unwrap());

    let saved = service
        .save_draft(&draft_with_text("stays put"))
        .unwrap()
        .unwrap();

    let err = service.update_text(saved.uuid, "   ").unwrap_err();
    assert!(matches!(err, QuoteServiceError::EmptyQuoteText(id) if id == saved.uuid));
    assert_eq!(service.get_quote(saved.uuid).unwrap().unwrap().text, "stays put");
}

#[test]
fn updates_against_missing_records_report_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = QuoteService::new(SqliteQuoteRepository::try_new(&conn).unwrap());

    let ghost = Uuid::new_v4();

    let text_err = service.update_text(ghost, "text").unwrap_err();
    assert!(matches!(text_err, QuoteServiceError::QuoteNotFound(id) if id == ghost));

    let note_err = service.update_note(ghost, "note").unwrap_err();
    assert!(matches!(note_err, QuoteServiceError::QuoteNotFound(id) if id == ghost));

    let color_err = service
        .cycle_color(ghost, CycleDirection::Forward)
        .unwrap_err();
    assert!(matches!(color_err, QuoteServiceError::QuoteNotFound(id) if id == ghost));

    let delete_err = service.delete_quote(ghost).unwrap_err();
    assert!(matches!(delete_err, QuoteServiceError::QuoteNotFound(id) if id == ghost));
}

#[test]
fn cycle_color_walks_the_whole_palette_and_returns() {
    let conn = open_db_in_memory().unwrap();
    let service = QuoteService::new(SqliteQuoteRepository::try_new(&conn).unwrap());

    let saved = service
        .save_draft(&draft_with_text("chromatic"))
        .unwrap()
        .unwrap();
    assert_eq!(saved.color_index, 0);

    let mut last = 0;
    for _ in 0..PALETTE.len() {
        last = service
            .cycle_color(saved.uuid, CycleDirection::Forward)
            .unwrap();
    }

    assert_eq!(last, 0);
    assert_eq!(service.get_quote(saved.uuid).unwrap().unwrap().color_index, 0);
}

#[test]
fn update_note_keeps_text_and_creation_time() {
    let conn = open_db_in_memory().unwrap();
    let service = QuoteService::new(SqliteQuoteRepository::try_new(&conn).unwrap());

    let saved = service
        .save_draft(&draft_with_text("annotated"))
        .unwrap()
        .unwrap();

    let updated = service.update_note(saved.uuid, "added afterwards").unwrap();

    assert_eq!(updated.uuid, saved.uuid);
    assert_eq!(updated.text, "annotated");
    assert_eq!(updated.note, "added afterwards");
    assert_eq!(updated.created_at, saved.created_at);
}

#[test]
fn feed_returns_all_saved_quotes() {
    let conn = open_db_in_memory().unwrap();
    let service = QuoteService::new(SqliteQuoteRepository::try_new(&conn).unwrap());

    for text in ["one", "two", "three"] {
        service.save_draft(&draft_with_text(text)).unwrap().unwrap();
    }

    let feed = service.feed(SortOrder::NewestFirst).unwrap();
    assert_eq!(feed.len(), 3);

    let ascending = service.feed(SortOrder::OldestFirst).unwrap();
    let mut reversed: Vec<_> = ascending.into_iter().map(|quote| quote.uuid).collect();
    reversed.reverse();
    let descending: Vec<_> = feed.into_iter().map(|quote| quote.uuid).collect();
    assert_eq!(descending, reversed);
}
