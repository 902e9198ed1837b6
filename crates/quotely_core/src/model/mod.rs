//! Domain model for the Quotely journal.
//!
//! # Responsibility
//! - Define the canonical persisted record (`Quote`) and its unsaved
//!   counterpart (`Draft`).
//! - Own the fixed background palette and its wrap-around index math.
//!
//! # Invariants
//! - Every persisted record is identified by a stable `QuoteId`.
//! - `created_at` is assigned once at construction and never mutated.
//! - `color_index` always lands inside palette bounds.

pub mod palette;
pub mod quote;
