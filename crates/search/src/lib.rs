// crates/search/src/lib.rs
//! Debounced incremental search
//!
//! Turns a rapid stream of query edits into at most one lookup per quiet
//! period, executes the lookup, and keeps a single consistent `SearchState`
//! for the UI. Responses that have been superseded by a newer query are
//! discarded, so the visible results always reflect the most recently
//! initiated search.

mod debounce;
mod executor;
mod navigation;
mod service;

pub use debounce::Debouncer;
pub use executor::SearchExecutor;
pub use navigation::{artist_route, ChannelNavigator, NavigationSink};
pub use service::SearchService;
