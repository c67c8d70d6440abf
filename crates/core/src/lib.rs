//! Core domain types for TuneScout: artist summaries and the search state
//! their consumers render

pub mod types;

// Re-export commonly used types
pub use types::{ArtistSummary, SearchPhase, SearchState};
