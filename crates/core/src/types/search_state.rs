//! Search state owned by the executor and read by the UI

use crate::types::ArtistSummary;
use serde::{Deserialize, Serialize};

/// Observable phase of the search lifecycle.
///
/// The machine is `Idle -> Loading -> Settled`, returning to `Idle` when the
/// query is cleared. `Idle` and `Settled` differ only in whether a query has
/// produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// No query settled and nothing in flight
    Idle,
    /// A request is in flight
    Loading,
    /// The latest request produced results or an error
    Settled,
}

/// The single source of truth for what the search UI renders.
///
/// Mutated only by the search executor; everything else takes snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    /// The query as last entered by the user
    pub query: String,

    /// Results for the most recently settled request
    pub results: Vec<ArtistSummary>,

    /// True while a request is in flight
    pub is_loading: bool,

    /// Human-readable description of the last failure, if any.
    /// Cleared by the next successful request.
    pub error: Option<String>,
}

impl SearchState {
    /// Creates the initial empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the lifecycle phase from the observable fields
    pub fn phase(&self) -> SearchPhase {
        if self.is_loading {
            SearchPhase::Loading
        } else if !self.results.is_empty() || self.error.is_some() {
            SearchPhase::Settled
        } else {
            SearchPhase::Idle
        }
    }

    /// True when there is nothing to render for the current query
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
