// crates/search/src/service.rs
//! Application-level wiring of debouncer, executor, and navigation

use crate::debounce::Debouncer;
use crate::executor::SearchExecutor;
use crate::navigation::{artist_route, NavigationSink};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tunescout_config::Config;
use tunescout_core::{ArtistSummary, SearchState};
use tunescout_network::{Client, ClientConfig, NetworkResult, SearchBackend};

const CHANNEL_BUFFER_SIZE: usize = 100;

/// The debounced search workflow, wired once at application start.
///
/// Query edits flow in through `set_query`; settled queries are emitted by
/// the debouncer into a channel, and a worker task runs each one on its own
/// task so a slow response never blocks a newer query. The UI reads state
/// through `state` snapshots and reports selections through `select`.
pub struct SearchService {
    debouncer: Debouncer,
    executor: Arc<SearchExecutor>,
    navigation: Arc<dyn NavigationSink>,
    worker: JoinHandle<()>,
}

impl SearchService {
    /// Creates a service over an injected backend.
    ///
    /// The backend and navigation sink are constructed by the caller and
    /// threaded through here; nothing in the search path touches globals.
    pub fn new(
        config: &Config,
        backend: Arc<dyn SearchBackend>,
        navigation: Arc<dyn NavigationSink>,
    ) -> Self {
        let executor = Arc::new(SearchExecutor::new(backend));

        let (tx, mut rx) = mpsc::channel::<String>(CHANNEL_BUFFER_SIZE);
        let debouncer = Debouncer::new(Duration::from_millis(config.search.debounce_ms), tx);

        let worker_executor = executor.clone();
        let worker = tokio::spawn(async move {
            while let Some(query) = rx.recv().await {
                let executor = worker_executor.clone();
                tokio::spawn(async move {
                    executor.search(&query).await;
                });
            }
        });

        Self {
            debouncer,
            executor,
            navigation,
            worker,
        }
    }

    /// Creates a service backed by an HTTP client built from the config
    pub fn with_http_backend(
        config: &Config,
        navigation: Arc<dyn NavigationSink>,
    ) -> NetworkResult<Self> {
        let client_config = ClientConfig::default()
            .with_base_url(config.network.base_url.clone())
            .with_timeout(Duration::from_secs(config.network.timeout_secs))
            .with_result_limit(config.search.result_limit)
            .with_max_retries(config.network.max_retries);

        let client = Client::with_config(client_config)?;
        Ok(Self::new(config, Arc::new(client), navigation))
    }

    /// Feeds one query edit (typically a keystroke) into the workflow.
    ///
    /// Empty input clears results synchronously and cancels any pending
    /// emission; non-empty input restarts the quiet period.
    pub fn set_query(&mut self, value: impl Into<String>) {
        let value = value.into();

        if value.trim().is_empty() {
            self.debouncer.cancel();
            self.executor.clear(value);
        } else {
            self.executor.note_query(value.clone());
            self.debouncer.schedule(value);
        }
    }

    /// Snapshot of the current search state
    pub fn state(&self) -> SearchState {
        self.executor.snapshot()
    }

    /// Reports a result selection to the routing collaborator
    pub fn select(&self, artist: &ArtistSummary) {
        log::info!("Artist selected: {} ({})", artist.name, artist.id);
        self.navigation.open(&artist_route(&artist.id));
    }

    /// The executor, for callers that bypass the debounce (e.g. an explicit
    /// "search now" action)
    pub fn executor(&self) -> Arc<SearchExecutor> {
        self.executor.clone()
    }

    /// Stops the workflow: no further emissions or lookups are started
    pub fn shutdown(&mut self) {
        self.debouncer.cancel();
        self.worker.abort();
    }
}

impl Drop for SearchService {
    fn drop(&mut self) {
        self.shutdown();
    }
}
