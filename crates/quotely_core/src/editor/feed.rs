//! Paged feed navigation state.
//!
//! # Responsibility
//! - Track the vertical pager over the composer page and saved entries.
//! - Re-anchor the focused page across store refreshes.
//!
//! # Invariants
//! - Page 0 is always the composer; entries follow newest-first.
//! - Paging clamps at both ends; it never wraps.
//! - After a refresh the focused entry is kept when it still exists,
//!   otherwise the pager clamps to the nearest remaining page.

use crate::model::quote::QuoteId;
use crate::repo::quote_repo::{QuoteRepository, RepoResult, SortOrder};
use crate::service::quote_service::QuoteService;

/// One page of the vertical feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedPage {
    /// The new-entry editor page.
    Composer,
    /// A saved entry, shown in the full editor for on-the-fly edits.
    Entry(QuoteId),
}

/// Vertical pager over composer + history pages.
#[derive(Debug, Default)]
pub struct FeedPager {
    entries: Vec<QuoteId>,
    current: usize,
}

impl FeedPager {
    /// Creates an empty pager focused on the composer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-queries the store and re-anchors the focused page.
    ///
    /// If the previously focused entry still exists the pager follows it to
    /// its new position. If it was deleted the pager stays at the same page
    /// number, which now holds the next remaining entry, clamped to the
    /// last page. The composer anchors to itself.
    pub fn refresh<R: QuoteRepository>(&mut self, service: &QuoteService<R>) -> RepoResult<()> {
        let anchor = self.current_entry_id();

        self.entries = service
            .feed(SortOrder::NewestFirst)?
            .into_iter()
            .map(|quote| quote.uuid)
            .collect();

        self.current = match anchor {
            None => 0,
            Some(id) => self
                .entries
                .iter()
                .position(|entry| *entry == id)
                .map(|index| index + 1)
                .unwrap_or_else(|| self.current.min(self.entries.len())),
        };

        Ok(())
    }

    /// Total number of pages, composer included.
    pub fn page_count(&self) -> usize {
        self.entries.len() + 1
    }

    /// The currently focused page.
    pub fn current_page(&self) -> FeedPage {
        if self.current == 0 {
            FeedPage::Composer
        } else {
            FeedPage::Entry(self.entries[self.current - 1])
        }
    }

    /// Scrolls one page down. Returns whether the focus moved.
    pub fn next_page(&mut self) -> bool {
        if self.current + 1 < self.page_count() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Scrolls one page up. Returns whether the focus moved.
    pub fn prev_page(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Jumps back to the composer page.
    pub fn scroll_to_composer(&mut self) {
        self.current = 0;
    }

    fn current_entry_id(&self) -> Option<QuoteId> {
        if self.current == 0 {
            None
        } else {
            self.entries.get(self.current - 1).copied()
        }
    }
}
