// crates/search/src/executor.rs
//! Turns settled queries into lookups and consistent state transitions

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tunescout_core::{ArtistSummary, SearchState};
use tunescout_network::SearchBackend;

/// Executes searches and owns the resulting `SearchState`.
///
/// All mutation of the state happens here. Each request is tagged with a
/// sequence number; a response is applied only if no newer request has been
/// initiated since, so results never go backwards in time. Failures are
/// converted into state and a log entry, never propagated to the caller.
pub struct SearchExecutor {
    backend: Arc<dyn SearchBackend>,
    state: Mutex<SearchState>,
    latest_seq: AtomicU64,
}

impl SearchExecutor {
    /// Creates an executor over the given backend
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self {
            backend,
            state: Mutex::new(SearchState::new()),
            latest_seq: AtomicU64::new(0),
        }
    }

    /// Returns a snapshot of the current state for rendering
    pub fn snapshot(&self) -> SearchState {
        self.state.lock().unwrap().clone()
    }

    /// Records the live query text without triggering a lookup.
    ///
    /// Lets the UI echo keystrokes while the debounce window is still open.
    pub fn note_query(&self, query: impl Into<String>) {
        self.state.lock().unwrap().query = query.into();
    }

    /// Synchronous empty-query fast path: clears results without any
    /// network contact.
    ///
    /// Also invalidates every in-flight request, so a late response cannot
    /// resurrect the cleared results.
    pub fn clear(&self, query: impl Into<String>) {
        self.latest_seq.fetch_add(1, Ordering::SeqCst);

        let mut state = self.state.lock().unwrap();
        state.query = query.into();
        state.results.clear();
        state.is_loading = false;
        state.error = None;
    }

    /// Looks up `query` and settles the state with the outcome.
    ///
    /// Empty or whitespace-only queries short-circuit to `clear`. A response
    /// superseded by a newer request is discarded without touching state.
    pub async fn search(&self, query: &str) {
        if query.trim().is_empty() {
            self.clear(query);
            return;
        }

        let seq = self.latest_seq.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.lock().unwrap();
            state.query = query.to_string();
            state.is_loading = true;
        }
        log::debug!("Searching for {:?} (request #{})", query, seq);

        let outcome = self.backend.search_artists(query).await;

        let mut state = self.state.lock().unwrap();
        // Stale check under the lock: only the most recently initiated
        // request may settle the state
        if self.latest_seq.load(Ordering::SeqCst) != seq {
            log::debug!("Discarding stale response for {:?} (request #{})", query, seq);
            return;
        }

        match outcome {
            Ok(artists) => {
                log::debug!("Search for {:?} returned {} artist(s)", query, artists.len());
                state.results = artists;
                state.error = None;
            }
            Err(e) => {
                // Previous results stay visible; the failure becomes state
                log::warn!("Search for {:?} failed: {}", query, e);
                state.error = Some(e.to_string());
            }
        }
        state.is_loading = false;
    }

    /// Results currently visible, cloned for convenience
    pub fn results(&self) -> Vec<ArtistSummary> {
        self.state.lock().unwrap().results.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::BoxFuture;
    use std::collections::HashMap;
    use std::time::Duration;
    use tunescout_network::{NetworkError, NetworkResult};

    /// Backend scripted per query: an optional delay and a fixed outcome
    struct ScriptedBackend {
        delays: HashMap<String, Duration>,
        failures: Vec<String>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedBackend {
        fn new() -> Self {
            Self {
                delays: HashMap::new(),
                failures: Vec::new(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn with_delay(mut self, query: &str, delay: Duration) -> Self {
            self.delays.insert(query.to_string(), delay);
            self
        }

        fn with_failure(mut self, query: &str) -> Self {
            self.failures.push(query.to_string());
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl SearchBackend for ScriptedBackend {
        fn search_artists<'a>(
            &'a self,
            query: &'a str,
        ) -> BoxFuture<'a, NetworkResult<Vec<ArtistSummary>>> {
            Box::pin(async move {
                self.calls.lock().unwrap().push(query.to_string());

                if let Some(delay) = self.delays.get(query) {
                    tokio::time::sleep(*delay).await;
                }

                if self.failures.iter().any(|q| q == query) {
                    return Err(NetworkError::Status {
                        code: 503,
                        reason: "Service Unavailable".to_string(),
                    });
                }

                Ok(vec![ArtistSummary::new(format!("id-{query}"), query)])
            })
        }
    }

    fn executor_over(backend: ScriptedBackend) -> (Arc<SearchExecutor>, Arc<ScriptedBackend>) {
        let backend = Arc::new(backend);
        let executor = Arc::new(SearchExecutor::new(backend.clone() as Arc<dyn SearchBackend>));
        (executor, backend)
    }

    #[tokio::test]
    async fn test_successful_search_settles_state() {
        let (executor, _) = executor_over(ScriptedBackend::new());

        executor.search("tarkan").await;

        let state = executor.snapshot();
        assert_eq!(state.query, "tarkan");
        assert_eq!(state.results.len(), 1);
        assert_eq!(state.results[0].id, "id-tarkan");
        assert!(!state.is_loading);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_empty_query_clears_without_network_call() {
        let (executor, backend) = executor_over(ScriptedBackend::new());

        executor.search("tarkan").await;
        assert_eq!(executor.results().len(), 1);

        executor.search("").await;

        let state = executor.snapshot();
        assert!(state.results.is_empty());
        assert!(!state.is_loading);
        assert!(state.error.is_none());
        assert_eq!(backend.calls(), vec!["tarkan"]);
    }

    #[tokio::test]
    async fn test_whitespace_query_clears_without_network_call() {
        let (executor, backend) = executor_over(ScriptedBackend::new());

        executor.search("   ").await;

        assert!(executor.snapshot().results.is_empty());
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_stale_response_discarded() {
        // "a" responds slowly, "ab" quickly: "a"'s response lands last but
        // must not overwrite "ab"'s results
        let backend = ScriptedBackend::new()
            .with_delay("a", Duration::from_millis(120))
            .with_delay("ab", Duration::from_millis(10));
        let (executor, _) = executor_over(backend);

        let slow = {
            let executor = executor.clone();
            tokio::spawn(async move { executor.search("a").await })
        };
        tokio::time::sleep(Duration::from_millis(30)).await;
        let fast = {
            let executor = executor.clone();
            tokio::spawn(async move { executor.search("ab").await })
        };

        fast.await.unwrap();
        slow.await.unwrap();

        let state = executor.snapshot();
        assert_eq!(state.results.len(), 1);
        assert_eq!(state.results[0].id, "id-ab");
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_results() {
        let backend = ScriptedBackend::new().with_failure("zzz");
        let (executor, _) = executor_over(backend);

        executor.search("tarkan").await;
        executor.search("zzz").await;

        let state = executor.snapshot();
        assert_eq!(state.results.len(), 1, "Previous results must survive");
        assert_eq!(state.results[0].id, "id-tarkan");
        assert!(state.error.is_some());
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn test_success_clears_previous_error() {
        let backend = ScriptedBackend::new().with_failure("zzz");
        let (executor, _) = executor_over(backend);

        executor.search("zzz").await;
        assert!(executor.snapshot().error.is_some());

        executor.search("tarkan").await;

        let state = executor.snapshot();
        assert!(state.error.is_none());
        assert_eq!(state.results.len(), 1);
    }

    #[tokio::test]
    async fn test_clear_invalidates_in_flight_request() {
        let backend = ScriptedBackend::new().with_delay("slow", Duration::from_millis(80));
        let (executor, _) = executor_over(backend);

        let pending = {
            let executor = executor.clone();
            tokio::spawn(async move { executor.search("slow").await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        executor.clear("");
        pending.await.unwrap();

        // The late response must not resurrect results
        let state = executor.snapshot();
        assert!(state.results.is_empty());
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn test_note_query_does_not_trigger_lookup() {
        let (executor, backend) = executor_over(ScriptedBackend::new());

        executor.note_query("tar");

        assert_eq!(executor.snapshot().query, "tar");
        assert!(backend.calls().is_empty());
    }
}
