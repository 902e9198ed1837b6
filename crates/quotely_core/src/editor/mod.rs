//! Swipe-driven editor view state.
//!
//! # Responsibility
//! - Model the entry/edit state machine driving the full-screen editor.
//! - Map completed drag gestures to semantic editor actions.
//! - Track paged-feed navigation over the composer page and saved entries.
//!
//! # Invariants
//! - All transitions are synchronous; there is no staging for bound records.
//! - A draft owns no identity until it is saved.
//! - The save indicator is purely cosmetic and cannot fail.

pub mod feed;
pub mod gesture;
pub mod session;
