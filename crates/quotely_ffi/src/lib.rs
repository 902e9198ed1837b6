//! Host-facing FFI crate for the Quotely UI.
//!
//! # Responsibility
//! - Re-export the use-case API surface consumed by the Flutter host.
//!
//! # Invariants
//! - No function exported from this crate may panic across the boundary.

pub mod api;
