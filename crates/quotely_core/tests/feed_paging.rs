use quotely_core::db::open_db_in_memory;
use quotely_core::{
    FeedPage, FeedPager, Quote, QuoteRepository, QuoteService, SqliteQuoteRepository,
};
use uuid::Uuid;

fn seeded_quote(suffix: u32, created_at: i64) -> Quote {
    let id = Uuid::parse_str(&format!("00000000-0000-4000-8000-0000000000{suffix:02}")).unwrap();
    Quote::with_id(id, created_at, format!("entry {suffix}"), "", 0).unwrap()
}

#[test]
fn empty_feed_has_only_the_composer_page() {
    let conn = open_db_in_memory().unwrap();
    let service = QuoteService::new(SqliteQuoteRepository::try_new(&conn).unwrap());

    let mut pager = FeedPager::new();
    pager.refresh(&service).unwrap();

    assert_eq!(pager.page_count(), 1);
    assert_eq!(pager.current_page(), FeedPage::Composer);
    assert!(!pager.next_page());
    assert!(!pager.prev_page());
}

#[test]
fn history_pages_follow_composer_newest_first() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuoteRepository::try_new(&conn).unwrap();
    let service = QuoteService::new(SqliteQuoteRepository::try_new(&conn).unwrap());

    let oldest = seeded_quote(1, 1_000);
    let middle = seeded_quote(2, 2_000);
    let newest = seeded_quote(3, 3_000);
    repo.insert_quote(&oldest).unwrap();
    repo.insert_quote(&newest).unwrap();
    repo.insert_quote(&middle).unwrap();

    let mut pager = FeedPager::new();
    pager.refresh(&service).unwrap();

    assert_eq!(pager.page_count(), 4);
    assert_eq!(pager.current_page(), FeedPage::Composer);

    assert!(pager.next_page());
    assert_eq!(pager.current_page(), FeedPage::Entry(newest.uuid));
    assert!(pager.next_page());
    assert_eq!(pager.current_page(), FeedPage::Entry(middle.uuid));
    assert!(pager.next_page());
    assert_eq!(pager.current_page(), FeedPage::Entry(oldest.uuid));

    // Clamped at the last page; no wrap-around.
    assert!(!pager.next_page());
    assert_eq!(pager.current_page(), FeedPage::Entry(oldest.uuid));

    assert!(pager.prev_page());
    assert!(pager.prev_page());
    assert!(pager.prev_page());
    assert_eq!(pager.current_page(), FeedPage::Composer);
    assert!(!pager.prev_page());
}

#[test]
fn refresh_follows_a_surviving_anchor_to_its_new_position() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuoteRepository::try_new(&conn).unwrap();
    let service = QuoteService::new(SqliteQuoteRepository::try_new(&conn).unwrap());

    let first = seeded_quote(1, 1_000);
    let second = seeded_quote(2, 2_000);
    repo.insert_quote(&first).unwrap();
    repo.insert_quote(&second).unwrap();

    let mut pager = FeedPager::new();
    pager.refresh(&service).unwrap();
    pager.next_page();
    pager.next_page();
    assert_eq!(pager.current_page(), FeedPage::Entry(first.uuid));

    // A newer entry lands above the anchored one.
    let newer = seeded_quote(3, 3_000);
    repo.insert_quote(&newer).unwrap();
    pager.refresh(&service).unwrap();

    assert_eq!(pager.page_count(), 4);
    assert_eq!(pager.current_page(), FeedPage::Entry(first.uuid));
}

#[test]
fn refresh_clamps_to_the_next_remaining_page_after_delete() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuoteRepository::try_new(&conn).unwrap();
    let service = QuoteService::new(SqliteQuoteRepository::try_new(&conn).unwrap());

    let oldest = seeded_quote(1, 1_000);
    let middle = seeded_quote(2, 2_000);
    let newest = seeded_quote(3, 3_000);
    repo.insert_quote(&oldest).unwrap();
    repo.insert_quote(&middle).unwrap();
    repo.insert_quote(&newest).unwrap();

    let mut pager = FeedPager::new();
    pager.refresh(&service).unwrap();
    pager.next_page();
    pager.next_page();
    assert_eq!(pager.current_page(), FeedPage::Entry(middle.uuid));

    service.delete_quote(middle.uuid).unwrap();
    pager.refresh(&service).unwrap();

    // Same page number now holds the next remaining (older) entry.
    assert_eq!(pager.page_count(), 3);
    assert_eq!(pager.current_page(), FeedPage::Entry(oldest.uuid));
}

#[test]
fn refresh_clamps_to_last_page_when_the_tail_is_deleted() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuoteRepository::try_new(&conn).unwrap();
    let service = QuoteService::new(SqliteQuoteRepository::try_new(&conn).unwrap());

    let older = seeded_quote(1, 1_000);
    let newer = seeded_quote(2, 2_000);
    repo.insert_quote(&older).unwrap();
    repo.insert_quote(&newer).unwrap();

    let mut pager = FeedPager::new();
    pager.refresh(&service).unwrap();
    pager.next_page();
    pager.next_page();
    assert_eq!(pager.current_page(), FeedPage::Entry(older.uuid));

    service.delete_quote(older.uuid).unwrap();
    pager.refresh(&service).unwrap();

    assert_eq!(pager.page_count(), 2);
    assert_eq!(pager.current_page(), FeedPage::Entry(newer.uuid));

    service.delete_quote(newer.uuid).unwrap();
    pager.refresh(&service).unwrap();

    assert_eq!(pager.page_count(), 1);
    assert_eq!(pager.current_page(), FeedPage::Composer);
}

#[test]
fn composer_anchors_to_itself_across_saves() {
    let conn = open_db_in_memory().unwrap();
    let service = QuoteService::new(SqliteQuoteRepository::try_new(&conn).unwrap());

    let mut pager = FeedPager::new();
    pager.refresh(&service).unwrap();

    let mut draft = quotely_core::Draft::new();
    draft.text = "fresh thought".to_string();
    let saved = service.save_draft(&draft).unwrap().unwrap();
    pager.refresh(&service).unwrap();

    // The new entry becomes page 1; focus stays on the composer.
    assert_eq!(pager.current_page(), FeedPage::Composer);
    assert_eq!(pager.page_count(), 2);
    assert!(pager.next_page());
    assert_eq!(pager.current_page(), FeedPage::Entry(saved.uuid));

    pager.scroll_to_composer();
    assert_eq!(pager.current_page(), FeedPage::Composer);
}
