//! Domain types shared across the TuneScout crates

mod artist;
mod search_state;

pub use artist::ArtistSummary;
pub use search_state::{SearchPhase, SearchState};
