use quotely_core::db::open_db_in_memory;
use quotely_core::{
    journal_tiles, Quote, QuoteRepository, QuoteService, SqliteQuoteRepository, EMPTY_JOURNAL_HINT,
};
use uuid::Uuid;

fn seeded_quote(suffix: u32, created_at: i64, text: &str, color_index: usize) -> Quote {
    let id = Uuid::parse_str(&format!("00000000-0000-4000-8000-0000000000{suffix:02}")).unwrap();
    Quote::with_id(id, created_at, text, "", color_index).unwrap()
}

#[test]
fn empty_journal_produces_no_tiles() {
    let conn = open_db_in_memory().unwrap();
    let service = QuoteService::new(SqliteQuoteRepository::try_new(&conn).unwrap());

    let tiles = journal_tiles(&service).unwrap();
    assert!(tiles.is_empty());
    // The hint the browse screen falls back to.
    assert!(EMPTY_JOURNAL_HINT.contains("Swipe down"));
}

#[test]
fn tiles_are_newest_first_and_carry_color() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuoteRepository::try_new(&conn).unwrap();
    let service = QuoteService::new(SqliteQuoteRepository::try_new(&conn).unwrap());

    // 2026-01-06 and 2026-01-07, noon UTC.
    let older = seeded_quote(1, 1_767_700_800_000, "written first", 2);
    let newer = seeded_quote(2, 1_767_787_200_000, "written later", 5);
    repo.insert_quote(&older).unwrap();
    repo.insert_quote(&newer).unwrap();

    let tiles = journal_tiles(&service).unwrap();

    assert_eq!(tiles.len(), 2);
    assert_eq!(tiles[0].quote_id, newer.uuid);
    assert_eq!(tiles[0].color_index, 5);
    assert_eq!(tiles[0].created_label, "Jan 7, 2026");
    assert_eq!(tiles[1].quote_id, older.uuid);
    assert_eq!(tiles[1].created_label, "Jan 6, 2026");
}

#[test]
fn tile_preview_clips_long_entries() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuoteRepository::try_new(&conn).unwrap();
    let service = QuoteService::new(SqliteQuoteRepository::try_new(&conn).unwrap());

    let text = "line one\nline two\nline three\nline four\nline five";
    let quote = seeded_quote(1, 1_767_700_800_000, text, 0);
    repo.insert_quote(&quote).unwrap();

    let tiles = journal_tiles(&service).unwrap();

    assert_eq!(tiles[0].preview, "line one\nline two\nline three\nline four");
}
