// crates/network/src/lib.rs
//! HTTP client for the artist-search endpoint

mod api;
mod backend;
mod client;
mod error;

pub use api::parse_artists;
pub use backend::SearchBackend;
pub use client::{Client, ClientConfig};
pub use error::{NetworkError, NetworkResult};
