//! Journal grid projection.
//!
//! # Responsibility
//! - Project persisted quotes into grid tiles for the browse screen.
//! - Derive clipped text previews and abbreviated date labels.
//!
//! # Invariants
//! - Tiles are ordered newest-first by creation time.
//! - Previews never exceed [`TILE_PREVIEW_MAX_LINES`] lines or
//!   [`TILE_PREVIEW_MAX_CHARS`] characters.

use crate::model::quote::{Quote, QuoteId};
use crate::repo::quote_repo::{QuoteRepository, RepoResult, SortOrder};
use crate::service::quote_service::QuoteService;
use chrono::DateTime;
use once_cell::sync::Lazy;
use regex::Regex;

/// Tiles clip the quote text after this many lines.
pub const TILE_PREVIEW_MAX_LINES: usize = 4;
/// Hard character cap for a tile preview.
pub const TILE_PREVIEW_MAX_CHARS: usize = 160;

/// Hint shown when the journal has no saved quotes yet.
pub const EMPTY_JOURNAL_HINT: &str =
    "Swipe down on the main screen to save your first quote.";

static LINE_WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]+").expect("valid whitespace regex"));

/// One tile of the journal grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalTile {
    /// Stable id, used to open the entry in the feed editor.
    pub quote_id: QuoteId,
    /// Clipped text preview.
    pub preview: String,
    /// Abbreviated creation date, time omitted (e.g. `Jan 6, 2026`).
    pub created_label: String,
    /// Background palette slot for the tile.
    pub color_index: usize,
}

/// Projects the full journal into grid tiles, newest first.
pub fn journal_tiles<R: QuoteRepository>(
    service: &QuoteService<R>,
) -> RepoResult<Vec<JournalTile>> {
    let quotes = service.feed(SortOrder::NewestFirst)?;
    Ok(quotes.iter().map(tile_for).collect())
}

/// Builds the grid tile for one quote.
pub fn tile_for(quote: &Quote) -> JournalTile {
    JournalTile {
        quote_id: quote.uuid,
        preview: derive_tile_preview(&quote.text),
        created_label: created_label(quote.created_at),
        color_index: quote.color_index,
    }
}

/// Derives the clipped preview shown on a grid tile.
///
/// Rules:
/// - Only the first [`TILE_PREVIEW_MAX_LINES`] lines survive.
/// - Runs of spaces/tabs inside a line collapse to one space.
/// - The result is capped at [`TILE_PREVIEW_MAX_CHARS`] characters with a
///   trailing ellipsis.
pub fn derive_tile_preview(text: &str) -> String {
    let clipped = text
        .lines()
        .take(TILE_PREVIEW_MAX_LINES)
        .map(|line| LINE_WHITESPACE_RE.replace_all(line.trim(), " ").into_owned())
        .collect::<Vec<_>>()
        .join("\n");

    let trimmed = clipped.trim();
    if trimmed.chars().count() <= TILE_PREVIEW_MAX_CHARS {
        return trimmed.to_string();
    }

    let mut capped = trimmed
        .chars()
        .take(TILE_PREVIEW_MAX_CHARS)
        .collect::<String>();
    capped.push_str("...");
    capped
}

/// Formats the creation stamp as an abbreviated date label.
///
/// Returns an empty label for stamps that do not map to a calendar date.
pub fn created_label(created_at_ms: i64) -> String {
    DateTime::from_timestamp_millis(created_at_ms)
        .map(|moment| moment.format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}
