//! Entry/edit session state machine.
//!
//! # Responsibility
//! - Hold the draft buffers for a not-yet-saved entry.
//! - Apply edits to a bound persisted record immediately, with no staging.
//! - Drive the cosmetic save indicator.
//!
//! # Invariants
//! - `Drafting` owns transient buffers only; the store is untouched until a
//!   non-empty save.
//! - `Editing` writes go straight through the service to the bound record.
//! - Saving an empty draft is a silent no-op.

use crate::editor::gesture::{classify, DragTranslation, EditorAction};
use crate::model::palette::{self, CycleDirection};
use crate::model::quote::{Draft, QuoteId};
use crate::repo::quote_repo::QuoteRepository;
use crate::service::quote_service::{QuoteService, QuoteServiceError};
use std::time::{Duration, Instant};

/// How long the "Saved" confirmation stays visible.
pub const SAVE_INDICATOR_DURATION: Duration = Duration::from_secs(1);

/// Timed cosmetic flag confirming a save.
///
/// Visibility is pull-based: callers ask with a current timestamp, so a
/// query that arrives after the owning view is gone simply reads `false`.
/// There is nothing to cancel and nothing that can fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaveIndicator {
    visible_until: Option<Instant>,
}

impl SaveIndicator {
    /// Shows the indicator for [`SAVE_INDICATOR_DURATION`] from `now`.
    pub fn flash(&mut self, now: Instant) {
        self.visible_until = Some(now + SAVE_INDICATOR_DURATION);
    }

    /// Returns whether the indicator should currently be drawn.
    pub fn is_visible(&self, now: Instant) -> bool {
        self.visible_until.is_some_and(|until| now < until)
    }
}

/// What the editor is currently bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorBinding {
    /// No backing record yet; fields live in transient buffers.
    Drafting(Draft),
    /// Bound directly to a persisted record's fields.
    Editing(QuoteId),
}

/// Result of a save request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A record was persisted (or, for a bound record, confirmed).
    Saved(QuoteId),
    /// Empty draft text; nothing was created.
    Ignored,
}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Draft buffers were reset; the store was not touched.
    DraftCleared,
    /// Exactly one persisted record was removed.
    RecordDeleted(QuoteId),
}

/// Outcome of dispatching a completed drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Drag did not reach any gesture threshold.
    None,
    /// Color cycled; carries the new palette index.
    ColorChanged(usize),
    /// Save gesture ran; carries the save result.
    Save(SaveOutcome),
}

/// Full-screen editor session over one page.
#[derive(Debug)]
pub struct QuoteEditor {
    binding: EditorBinding,
    indicator: SaveIndicator,
}

impl QuoteEditor {
    /// Opens a fresh composer session with empty buffers.
    pub fn new_draft() -> Self {
        Self {
            binding: EditorBinding::Drafting(Draft::new()),
            indicator: SaveIndicator::default(),
        }
    }

    /// Opens a session bound to an existing persisted record.
    pub fn bound_to(id: QuoteId) -> Self {
        Self {
            binding: EditorBinding::Editing(id),
            indicator: SaveIndicator::default(),
        }
    }

    /// Current binding state.
    pub fn binding(&self) -> &EditorBinding {
        &self.binding
    }

    /// Returns the draft buffers while in `Drafting`.
    pub fn draft(&self) -> Option<&Draft> {
        match &self.binding {
            EditorBinding::Drafting(draft) => Some(draft),
            EditorBinding::Editing(_) => None,
        }
    }

    /// Whether the session has no backing record yet.
    pub fn is_drafting(&self) -> bool {
        matches!(self.binding, EditorBinding::Drafting(_))
    }

    /// Whether the save confirmation should currently be drawn.
    pub fn save_indicator_visible(&self, now: Instant) -> bool {
        self.indicator.is_visible(now)
    }

    /// Writes the primary text field.
    ///
    /// Drafting buffers locally; editing writes through to the bound
    /// record immediately. An empty text edit on a bound record is ignored
    /// so persisted quotes keep non-empty text.
    pub fn set_text<R: QuoteRepository>(
        &mut self,
        text: impl Into<String>,
        service: &QuoteService<R>,
    ) -> Result<(), QuoteServiceError> {
        let text = text.into();
        match &mut self.binding {
            EditorBinding::Drafting(draft) => {
                draft.text = text;
                Ok(())
            }
            EditorBinding::Editing(id) => {
                if text.trim().is_empty() {
                    return Ok(());
                }
                service.update_text(*id, text)?;
                Ok(())
            }
        }
    }

    /// Writes the note annotation field.
    pub fn set_note<R: QuoteRepository>(
        &mut self,
        note: impl Into<String>,
        service: &QuoteService<R>,
    ) -> Result<(), QuoteServiceError> {
        match &mut self.binding {
            EditorBinding::Drafting(draft) => {
                draft.note = note.into();
                Ok(())
            }
            EditorBinding::Editing(id) => {
                service.update_note(*id, note)?;
                Ok(())
            }
        }
    }

    /// Steps the background color with wrap-around.
    ///
    /// Returns the new palette index.
    pub fn cycle_color<R: QuoteRepository>(
        &mut self,
        direction: CycleDirection,
        service: &QuoteService<R>,
    ) -> Result<usize, QuoteServiceError> {
        match &mut self.binding {
            EditorBinding::Drafting(draft) => {
                draft.color_index = palette::cycle(draft.color_index, direction);
                Ok(draft.color_index)
            }
            EditorBinding::Editing(id) => service.cycle_color(*id, direction),
        }
    }

    /// Runs the save action.
    ///
    /// Drafting with empty text is a silent no-op. Drafting with text
    /// creates exactly one record, clears the buffers (color stays) and
    /// flashes the indicator; the session remains a composer. For a bound
    /// record every edit is already persisted, so save only confirms.
    pub fn save<R: QuoteRepository>(
        &mut self,
        service: &QuoteService<R>,
        now: Instant,
    ) -> Result<SaveOutcome, QuoteServiceError> {
        match &mut self.binding {
            EditorBinding::Drafting(draft) => match service.save_draft(draft)? {
                Some(quote) => {
                    draft.clear();
                    self.indicator.flash(now);
                    Ok(SaveOutcome::Saved(quote.uuid))
                }
                None => Ok(SaveOutcome::Ignored),
            },
            EditorBinding::Editing(id) => {
                let id = *id;
                self.indicator.flash(now);
                Ok(SaveOutcome::Saved(id))
            }
        }
    }

    /// Runs the delete action.
    ///
    /// A draft merely resets its buffers; a bound record is removed from
    /// the store and the session falls back to a fresh composer.
    pub fn delete<R: QuoteRepository>(
        &mut self,
        service: &QuoteService<R>,
    ) -> Result<DeleteOutcome, QuoteServiceError> {
        match &mut self.binding {
            EditorBinding::Drafting(draft) => {
                draft.clear();
                Ok(DeleteOutcome::DraftCleared)
            }
            EditorBinding::Editing(id) => {
                let id = *id;
                service.delete_quote(id)?;
                self.binding = EditorBinding::Drafting(Draft::new());
                Ok(DeleteOutcome::RecordDeleted(id))
            }
        }
    }

    /// Classifies and dispatches a completed drag.
    pub fn handle_drag<R: QuoteRepository>(
        &mut self,
        translation: DragTranslation,
        service: &QuoteService<R>,
        now: Instant,
    ) -> Result<DragOutcome, QuoteServiceError> {
        match classify(translation) {
            None => Ok(DragOutcome::None),
            Some(EditorAction::CycleColor(direction)) => {
                let index = self.cycle_color(direction, service)?;
                Ok(DragOutcome::ColorChanged(index))
            }
            Some(EditorAction::Save) => {
                let outcome = self.save(service, now)?;
                Ok(DragOutcome::Save(outcome))
            }
        }
    }
}
