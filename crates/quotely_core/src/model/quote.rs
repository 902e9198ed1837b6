//! Quote domain model.
//!
//! # Responsibility
//! - Define the canonical journal entry record and its draft counterpart.
//! - Validate record integrity on construction, persistence and hydration.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another quote.
//! - `created_at` is set once at construction and is the sole sort key.
//! - `color_index` stays inside palette bounds; constructors wrap rather
//!   than reject out-of-range input.
//! - Persisted quotes always carry non-empty `text`.

use crate::model::palette;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for a persisted journal entry.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type QuoteId = Uuid;

/// Integrity failure for a quote record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteValidationError {
    /// The nil UUID is reserved and never a valid identity.
    NilUuid,
    /// Persisted quotes must carry non-empty text.
    EmptyText,
    /// `color_index` points outside the palette.
    ColorIndexOutOfRange { index: usize, palette_len: usize },
    /// Creation timestamp is missing or pre-epoch.
    InvalidCreatedAt { created_at: i64 },
}

impl Display for QuoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilUuid => write!(f, "quote uuid must not be nil"),
            Self::EmptyText => write!(f, "quote text must not be empty"),
            Self::ColorIndexOutOfRange { index, palette_len } => write!(
                f,
                "color_index ({index}) must be below palette length ({palette_len})"
            ),
            Self::InvalidCreatedAt { created_at } => {
                write!(f, "created_at ({created_at}) must be a positive epoch offset")
            }
        }
    }
}

impl Error for QuoteValidationError {}

/// Canonical persisted journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    /// Stable global ID used for feed anchoring and bound editing.
    pub uuid: QuoteId,
    /// Primary content. Non-empty for every persisted record.
    pub text: String,
    /// Secondary "note to self" annotation. May be empty.
    pub note: String,
    /// Unix epoch milliseconds, stamped once at construction.
    pub created_at: i64,
    /// Background color slot in the fixed palette.
    pub color_index: usize,
}

impl Quote {
    /// Creates a new quote with a generated ID and a fresh creation stamp.
    ///
    /// `color_index` is wrapped into palette bounds, matching the
    /// swipe-cycling semantics of the editor.
    pub fn new(text: impl Into<String>, note: impl Into<String>, color_index: i64) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            text: text.into(),
            note: note.into(),
            created_at: epoch_millis_now(),
            color_index: palette::wrap(color_index),
        }
    }

    /// Reconstructs a quote with caller-provided identity and creation time.
    ///
    /// Used by storage hydration and fixtures where identity already exists.
    /// The full record is validated; identity fields are taken as-is.
    pub fn with_id(
        uuid: QuoteId,
        created_at: i64,
        text: impl Into<String>,
        note: impl Into<String>,
        color_index: usize,
    ) -> Result<Self, QuoteValidationError> {
        let quote = Self {
            uuid,
            text: text.into(),
            note: note.into(),
            created_at,
            color_index,
        };
        quote.validate()?;
        Ok(quote)
    }

    /// Checks record integrity.
    ///
    /// Write paths call this before SQL mutations; read paths call it on
    /// hydrated rows so persisted garbage surfaces as an error instead of
    /// flowing into views.
    pub fn validate(&self) -> Result<(), QuoteValidationError> {
        if self.uuid.is_nil() {
            return Err(QuoteValidationError::NilUuid);
        }
        if self.text.trim().is_empty() {
            return Err(QuoteValidationError::EmptyText);
        }
        if self.color_index >= palette::PALETTE.len() {
            return Err(QuoteValidationError::ColorIndexOutOfRange {
                index: self.color_index,
                palette_len: palette::PALETTE.len(),
            });
        }
        if self.created_at <= 0 {
            return Err(QuoteValidationError::InvalidCreatedAt {
                created_at: self.created_at,
            });
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for Quote {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawQuote {
            uuid: QuoteId,
            text: String,
            note: String,
            created_at: i64,
            color_index: usize,
        }

        let raw = RawQuote::deserialize(deserializer)?;
        let quote = Self {
            uuid: raw.uuid,
            text: raw.text,
            note: raw.note,
            created_at: raw.created_at,
            color_index: raw.color_index,
        };
        quote.validate().map_err(D::Error::custom)?;
        Ok(quote)
    }
}

/// Transient buffers for a not-yet-saved journal entry.
///
/// A draft owns no identity and no creation time; both are assigned the
/// moment it is promoted into a persisted `Quote`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    /// Primary content buffer.
    pub text: String,
    /// Secondary annotation buffer.
    pub note: String,
    /// Currently selected palette slot.
    pub color_index: usize,
}

impl Draft {
    /// Creates an empty draft on the first palette color.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the draft has no saveable content.
    pub fn is_empty_text(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Resets the text buffers after a save or a draft discard.
    ///
    /// The selected color is kept so the canvas does not jump.
    pub fn clear(&mut self) {
        self.text.clear();
        self.note.clear();
    }
}

fn epoch_millis_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
