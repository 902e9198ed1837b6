//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for journal entries.
//! - Isolate SQLite query details from editor/feed orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Quote::validate()` before persistence.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod quote_repo;
