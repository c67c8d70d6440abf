// crates/search/src/navigation.rs
//! Seam to the external routing collaborator
//!
//! Selecting a result is a one-way notification: the service formats the
//! route and hands it off, and navigation never feeds back into search
//! state.

use tokio::sync::mpsc;

/// Builds the detail-view route for an artist
pub fn artist_route(artist_id: &str) -> String {
    format!("/artist/{}", artist_id)
}

/// Receives navigation requests from the search service
pub trait NavigationSink: Send + Sync {
    /// Requests navigation to `route`
    fn open(&self, route: &str);
}

/// Channel-backed sink: routes are queued for whatever drives the router.
///
/// Also the sink of choice in tests, where the receiver side asserts on
/// emitted routes.
pub struct ChannelNavigator {
    tx: mpsc::UnboundedSender<String>,
}

impl ChannelNavigator {
    /// Creates the sink and the receiving end for the router
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl NavigationSink for ChannelNavigator {
    fn open(&self, route: &str) {
        if self.tx.send(route.to_string()).is_err() {
            log::debug!("Navigation request dropped: router receiver closed");
        }
    }
}
