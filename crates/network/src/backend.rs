// crates/network/src/backend.rs
//! Object-safe seam between the search executor and the HTTP client
//!
//! The executor is injected with an `Arc<dyn SearchBackend>`, so tests can
//! script responses without touching the network.

use crate::client::Client;
use crate::error::NetworkResult;
use futures::future::BoxFuture;
use tunescout_core::ArtistSummary;

/// A source of artist search results
pub trait SearchBackend: Send + Sync {
    /// Looks up artists matching `query`
    fn search_artists<'a>(
        &'a self,
        query: &'a str,
    ) -> BoxFuture<'a, NetworkResult<Vec<ArtistSummary>>>;
}

impl SearchBackend for Client {
    fn search_artists<'a>(
        &'a self,
        query: &'a str,
    ) -> BoxFuture<'a, NetworkResult<Vec<ArtistSummary>>> {
        Box::pin(Client::search_artists(self, query))
    }
}
