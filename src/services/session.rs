//! Session controller for the browse flow.
//!
//! Owns the two displayed lists (catalog results, recent keywords) and the
//! view toggle between them. Transitions take `&mut self`, so overlapping
//! submissions cannot exist: the displayed results always belong to the most
//! recently issued request.

use std::sync::Arc;

use tracing::warn;

use crate::db::{HistoryEntry, Store};
use crate::models::book::Book;
use crate::services::BookCatalog;

/// Which list the session is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    /// Search or best-seller results.
    Results,
    /// Recent search keywords, shown while composing a query.
    History,
}

pub struct SearchSession {
    catalog: Arc<dyn BookCatalog>,
    store: Store,
    view: ActiveView,
    results: Vec<Book>,
    history: Vec<HistoryEntry>,
}

impl SearchSession {
    pub fn new(catalog: Arc<dyn BookCatalog>, store: Store) -> Self {
        Self {
            catalog,
            store,
            view: ActiveView::Results,
            results: Vec::new(),
            history: Vec::new(),
        }
    }

    #[must_use]
    pub const fn view(&self) -> ActiveView {
        self.view
    }

    #[must_use]
    pub fn results(&self) -> &[Book] {
        &self.results
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Input-field focus: switch to the history view and reload it.
    ///
    /// A storage failure is logged and leaves the previously displayed
    /// history untouched.
    pub async fn focus_input(&mut self) {
        self.view = ActiveView::History;

        match self.store.recent_keywords().await {
            Ok(entries) => self.history = entries,
            Err(e) => warn!("Failed to load search history: {e}"),
        }
    }

    /// Submits a keyword: hides the history view, records the keyword, and
    /// issues exactly one search request.
    ///
    /// The keyword is recorded regardless of search outcome. On search
    /// failure the prior results stay untouched. Empty or whitespace-only
    /// input is a no-op.
    pub async fn submit(&mut self, keyword: &str) {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return;
        }

        self.view = ActiveView::Results;

        let (searched, recorded) = tokio::join!(
            self.catalog.search(keyword),
            self.store.record_keyword(keyword),
        );

        if let Err(e) = recorded {
            warn!("Failed to record keyword '{keyword}': {e}");
        }

        match searched {
            Ok(books) => self.results = books,
            Err(e) => warn!("Search for '{keyword}' failed: {e}"),
        }
    }

    /// Deletes every history entry matching the keyword exactly, then
    /// reloads and redisplays the history view.
    pub async fn delete_history(&mut self, keyword: &str) {
        self.view = ActiveView::History;

        if let Err(e) = self.store.delete_keyword(keyword).await {
            warn!("Failed to delete '{keyword}' from history: {e}");
        }

        match self.store.recent_keywords().await {
            Ok(entries) => self.history = entries,
            Err(e) => warn!("Failed to reload search history: {e}"),
        }
    }

    /// Fetches the best-seller listing and replaces the result list on
    /// success; on failure logs and leaves the list untouched.
    pub async fn load_best_sellers(&mut self) {
        self.view = ActiveView::Results;

        match self.catalog.best_sellers().await {
            Ok(books) => self.results = books,
            Err(e) => warn!("Best-seller fetch failed: {e}"),
        }
    }
}
