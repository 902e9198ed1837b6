//! Quote use-case service.
//!
//! # Responsibility
//! - Provide the only creation path for journal entries (`save_draft`).
//! - Provide in-place edit operations for records bound to an open editor.
//!
//! # Invariants
//! - Saving an empty draft is a silent no-op, never an error.
//! - Edits mutate the record in place; identity and `created_at` never
//!   change after creation.
//! - A persisted quote can never transition to empty text.

use crate::model::palette::{self, CycleDirection};
use crate::model::quote::{Draft, Quote, QuoteId};
use crate::repo::quote_repo::{QuoteListQuery, QuoteRepository, RepoError, RepoResult, SortOrder};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for quote use-cases.
#[derive(Debug)]
pub enum QuoteServiceError {
    /// A bound record would end up with empty text.
    EmptyQuoteText(QuoteId),
    /// Target quote does not exist.
    QuoteNotFound(QuoteId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for QuoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyQuoteText(id) => {
                write!(f, "quote {id} cannot be updated to empty text")
            }
            Self::QuoteNotFound(id) => write!(f, "quote not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent quote state: {details}"),
        }
    }
}

impl Error for QuoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for QuoteServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::QuoteNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Use-case facade over quote repository implementations.
pub struct QuoteService<R: QuoteRepository> {
    repo: R,
}

impl<R: QuoteRepository> QuoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Promotes a draft into a persisted quote.
    ///
    /// # Contract
    /// - Empty (whitespace-only) text skips the save and returns `None`;
    ///   the draft buffers are left for the caller to manage.
    /// - Non-empty text creates exactly one record and returns it read
    ///   back from storage.
    pub fn save_draft(&self, draft: &Draft) -> Result<Option<Quote>, QuoteServiceError> {
        if draft.is_empty_text() {
            debug!("event=quote_save_skipped module=service reason=empty_text");
            return Ok(None);
        }

        let quote = Quote::new(
            draft.text.clone(),
            draft.note.clone(),
            draft.color_index as i64,
        );
        let id = self.repo.insert_quote(&quote)?;
        info!("event=quote_saved module=service quote_id={id}");

        let stored = self
            .repo
            .get_quote(id)?
            .ok_or(QuoteServiceError::InconsistentState(
                "created quote not found in read-back",
            ))?;
        Ok(Some(stored))
    }

    /// Gets one quote by stable ID.
    pub fn get_quote(&self, id: QuoteId) -> RepoResult<Option<Quote>> {
        self.repo.get_quote(id)
    }

    /// Lists the full journal in the requested creation-time order.
    pub fn feed(&self, order: SortOrder) -> RepoResult<Vec<Quote>> {
        self.repo.list_quotes(&QuoteListQuery {
            order,
            ..QuoteListQuery::default()
        })
    }

    /// Returns the number of persisted quotes.
    pub fn count(&self) -> RepoResult<u64> {
        self.repo.count_quotes()
    }

    /// Replaces the text of a bound record in place.
    ///
    /// Empty text is rejected so persisted quotes keep their non-empty
    /// text invariant.
    pub fn update_text(
        &self,
        id: QuoteId,
        text: impl Into<String>,
    ) -> Result<Quote, QuoteServiceError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuoteServiceError::EmptyQuoteText(id));
        }

        let mut quote = self.load(id)?;
        quote.text = text;
        self.repo.update_quote(&quote)?;
        self.read_back(id)
    }

    /// Replaces the note annotation of a bound record in place.
    pub fn update_note(
        &self,
        id: QuoteId,
        note: impl Into<String>,
    ) -> Result<Quote, QuoteServiceError> {
        let mut quote = self.load(id)?;
        quote.note = note.into();
        self.repo.update_quote(&quote)?;
        self.read_back(id)
    }

    /// Steps the background color of a bound record with wrap-around.
    ///
    /// Returns the new palette index.
    pub fn cycle_color(
        &self,
        id: QuoteId,
        direction: CycleDirection,
    ) -> Result<usize, QuoteServiceError> {
        let mut quote = self.load(id)?;
        quote.color_index = palette::cycle(quote.color_index, direction);
        self.repo.update_quote(&quote)?;
        Ok(quote.color_index)
    }

    /// Removes exactly one persisted quote.
    pub fn delete_quote(&self, id: QuoteId) -> Result<(), QuoteServiceError> {
        self.repo.delete_quote(id)?;
        info!("event=quote_deleted module=service quote_id={id}");
        Ok(())
    }

    fn load(&self, id: QuoteId) -> Result<Quote, QuoteServiceError> {
        self.repo
            .get_quote(id)?
            .ok_or(QuoteServiceError::QuoteNotFound(id))
    }

    fn read_back(&self, id: QuoteId) -> Result<Quote, QuoteServiceError> {
        self.repo
            .get_quote(id)?
            .ok_or(QuoteServiceError::InconsistentState(
                "updated quote not found in read-back",
            ))
    }
}
