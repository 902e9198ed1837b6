//! Drag translation to editor action mapping.
//!
//! # Responsibility
//! - Classify a completed drag by dominant axis and magnitude.
//!
//! # Invariants
//! - Horizontal swipes only ever cycle color; the downward swipe saves.
//! - Sub-threshold drags map to no action.

use crate::model::palette::CycleDirection;

/// Minimum horizontal magnitude before a drag counts as a color swipe.
pub const HORIZONTAL_SWIPE_MIN: f32 = 50.0;
/// Minimum downward magnitude before a drag counts as a save swipe.
pub const SAVE_SWIPE_MIN: f32 = 100.0;

/// Net translation of a completed drag, in points.
///
/// Positive `dx` points right, positive `dy` points down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragTranslation {
    pub dx: f32,
    pub dy: f32,
}

/// Semantic action resolved from a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    /// Step the background color; left swipes move forward, right swipes
    /// move backward.
    CycleColor(CycleDirection),
    /// Persist the current entry.
    Save,
}

/// Resolves a completed drag into an editor action.
///
/// The dominant axis wins: a drag that is mostly horizontal can only cycle
/// color, a drag that is mostly vertical can only save (and only downward).
pub fn classify(translation: DragTranslation) -> Option<EditorAction> {
    if translation.dx.abs() > translation.dy.abs() {
        if translation.dx < -HORIZONTAL_SWIPE_MIN {
            Some(EditorAction::CycleColor(CycleDirection::Forward))
        } else if translation.dx > HORIZONTAL_SWIPE_MIN {
            Some(EditorAction::CycleColor(CycleDirection::Backward))
        } else {
            None
        }
    } else if translation.dy > SAVE_SWIPE_MIN {
        Some(EditorAction::Save)
    } else {
        None
    }
}
