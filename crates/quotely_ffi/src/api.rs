//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Keep error semantics simple for the UI: envelopes, never exceptions.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Empty-text saves are silent skips, matching the editor semantics.

use log::error;
use quotely_core::db::open_db;
use quotely_core::journal::journal_tiles;
use quotely_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    CycleDirection, Draft, Ink, QuoteId, QuoteService, SqliteQuoteRepository, PALETTE,
};
use std::path::PathBuf;
use std::sync::OnceLock;
use uuid::Uuid;

const TILE_DEFAULT_LIMIT: u32 = 30;
const TILE_LIMIT_MAX: u32 = 100;
const STORE_DB_FILE_NAME: &str = "quotely.sqlite3";
static STORE_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success, error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for quote commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteActionResponse {
    /// Whether the operation succeeded (silent skips count as success).
    pub ok: bool,
    /// Affected quote ID, absent for skips and failures.
    pub quote_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl QuoteActionResponse {
    fn success(message: impl Into<String>, quote_id: String) -> Self {
        Self {
            ok: true,
            quote_id: Some(quote_id),
            message: message.into(),
        }
    }

    fn skipped(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            quote_id: None,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            quote_id: None,
            message: message.into(),
        }
    }
}

/// One journal grid tile for the browse screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalTileItem {
    /// Stable quote ID in string form.
    pub quote_id: String,
    /// Clipped text preview.
    pub preview: String,
    /// Abbreviated creation date label.
    pub created_label: String,
    /// Palette slot for the tile background.
    pub color_index: u32,
}

/// Journal listing envelope for the browse screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalResponse {
    /// Tiles newest-first (empty when the journal is empty).
    pub items: Vec<JournalTileItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
    /// Effective applied tile limit.
    pub applied_limit: u32,
}

/// One palette swatch, so the host renders the same colors as core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteColorItem {
    pub name: String,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    /// Whether the readable foreground on this background is dark.
    pub dark_ink: bool,
}

/// Returns the fixed background palette in cycling order.
///
/// # FFI contract
/// - Sync call, no I/O.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn palette_colors() -> Vec<PaletteColorItem> {
    PALETTE
        .iter()
        .map(|entry| PaletteColorItem {
            name: entry.name.to_owned(),
            red: entry.rgb[0],
            green: entry.rgb[1],
            blue: entry.rgb[2],
            dark_ink: entry.ink == Ink::Dark,
        })
        .collect()
}

/// Saves a new quote from the composer page.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Empty (whitespace-only) text is a silent skip: `ok=true`, no ID.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn save_quote(text: String, note: String, color_index: u32) -> QuoteActionResponse {
    let draft = Draft {
        text,
        note,
        color_index: color_index as usize,
    };

    match with_quote_service(|service| {
        service
            .save_draft(&draft)
            .map_err(|err| format!("save_quote failed: {err}"))
    }) {
        Ok(Some(quote)) => QuoteActionResponse::success("Quote saved.", quote.uuid.to_string()),
        Ok(None) => QuoteActionResponse::skipped("Save skipped: empty quote text."),
        Err(message) => fail(message),
    }
}

/// Lists journal grid tiles, newest first.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Returns a deterministic envelope with the applied limit.
#[flutter_rust_bridge::frb(sync)]
pub fn list_journal(limit: Option<u32>) -> JournalResponse {
    let applied_limit = normalize_tile_limit(limit);

    match with_quote_service(|service| {
        journal_tiles(service).map_err(|err| format!("list_journal failed: {err}"))
    }) {
        Ok(tiles) => {
            let items = tiles
                .into_iter()
                .take(applied_limit as usize)
                .map(|tile| JournalTileItem {
                    quote_id: tile.quote_id.to_string(),
                    preview: tile.preview,
                    created_label: tile.created_label,
                    color_index: tile.color_index as u32,
                })
                .collect::<Vec<_>>();
            let message = if items.is_empty() {
                "No quotes yet.".to_string()
            } else {
                format!("Listed {} quote(s).", items.len())
            };
            JournalResponse {
                items,
                message,
                applied_limit,
            }
        }
        Err(message) => {
            error!("event=ffi_call module=ffi status=error call=list_journal error={message}");
            JournalResponse {
                items: Vec::new(),
                message,
                applied_limit,
            }
        }
    }
}

/// Replaces the text of a bound record in place.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn update_quote_text(quote_id: String, text: String) -> QuoteActionResponse {
    let id = match parse_quote_id(&quote_id) {
        Ok(id) => id,
        Err(message) => return fail(message),
    };

    match with_quote_service(|service| {
        service
            .update_text(id, text)
            .map_err(|err| format!("update_quote_text failed: {err}"))
    }) {
        Ok(quote) => QuoteActionResponse::success("Quote updated.", quote.uuid.to_string()),
        Err(message) => fail(message),
    }
}

/// Replaces the note annotation of a bound record in place.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn update_quote_note(quote_id: String, note: String) -> QuoteActionResponse {
    let id = match parse_quote_id(&quote_id) {
        Ok(id) => id,
        Err(message) => return fail(message),
    };

    match with_quote_service(|service| {
        service
            .update_note(id, note)
            .map_err(|err| format!("update_quote_note failed: {err}"))
    }) {
        Ok(quote) => QuoteActionResponse::success("Note updated.", quote.uuid.to_string()),
        Err(message) => fail(message),
    }
}

/// Steps the background color of a bound record with wrap-around.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - The message carries the new palette index.
#[flutter_rust_bridge::frb(sync)]
pub fn cycle_quote_color(quote_id: String, forward: bool) -> QuoteActionResponse {
    let id = match parse_quote_id(&quote_id) {
        Ok(id) => id,
        Err(message) => return fail(message),
    };
    let direction = if forward {
        CycleDirection::Forward
    } else {
        CycleDirection::Backward
    };

    match with_quote_service(|service| {
        service
            .cycle_color(id, direction)
            .map_err(|err| format!("cycle_quote_color failed: {err}"))
    }) {
        Ok(index) => {
            QuoteActionResponse::success(format!("Color cycled to {index}."), id.to_string())
        }
        Err(message) => fail(message),
    }
}

/// Removes exactly one persisted quote.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_quote(quote_id: String) -> QuoteActionResponse {
    let id = match parse_quote_id(&quote_id) {
        Ok(id) => id,
        Err(message) => return fail(message),
    };

    match with_quote_service(|service| {
        service
            .delete_quote(id)
            .map_err(|err| format!("delete_quote failed: {err}"))
    }) {
        Ok(()) => QuoteActionResponse::success("Quote deleted.", id.to_string()),
        Err(message) => fail(message),
    }
}

fn fail(message: String) -> QuoteActionResponse {
    error!("event=ffi_call module=ffi status=error error={message}");
    QuoteActionResponse::failure(message)
}

fn normalize_tile_limit(limit: Option<u32>) -> u32 {
    match limit {
        Some(0) => TILE_DEFAULT_LIMIT,
        Some(value) if value > TILE_LIMIT_MAX => TILE_LIMIT_MAX,
        Some(value) => value,
        None => TILE_DEFAULT_LIMIT,
    }
}

fn parse_quote_id(raw: &str) -> Result<QuoteId, String> {
    Uuid::parse_str(raw.trim()).map_err(|_| format!("invalid quote id `{raw}`"))
}

fn resolve_store_db_path() -> PathBuf {
    STORE_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("QUOTELY_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(STORE_DB_FILE_NAME)
        })
        .clone()
}

fn with_quote_service<T>(
    f: impl FnOnce(&QuoteService<SqliteQuoteRepository<'_>>) -> Result<T, String>,
) -> Result<T, String> {
    let db_path = resolve_store_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("store open failed: {err}"))?;
    let repo = SqliteQuoteRepository::try_new(&conn)
        .map_err(|err| format!("store repo init failed: {err}"))?;
    let service = QuoteService::new(repo);
    f(&service)
}
