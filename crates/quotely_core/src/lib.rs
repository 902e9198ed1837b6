//! Core domain logic for Quotely.
//! This crate is the single source of truth for journal invariants.

pub mod db;
pub mod editor;
pub mod journal;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use editor::feed::{FeedPage, FeedPager};
pub use editor::gesture::{DragTranslation, EditorAction};
pub use editor::session::{
    DeleteOutcome, DragOutcome, EditorBinding, QuoteEditor, SaveIndicator, SaveOutcome,
    SAVE_INDICATOR_DURATION,
};
pub use journal::{journal_tiles, JournalTile, EMPTY_JOURNAL_HINT};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::palette::{CycleDirection, Ink, PaletteColor, PALETTE};
pub use model::quote::{Draft, Quote, QuoteId, QuoteValidationError};
pub use repo::quote_repo::{
    QuoteListQuery, QuoteRepository, RepoError, RepoResult, SortOrder, SqliteQuoteRepository,
};
pub use service::quote_service::{QuoteService, QuoteServiceError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
