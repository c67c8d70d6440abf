// crates/network/src/api.rs
//! Wire format of the artist-search endpoint and boundary coercion
//!
//! The endpoint returns `{ "artists": [ { "id", "name", "images": [{"url"}],
//! "genres": ["..."] } ] }`. Parsing is deliberately lenient: a missing or
//! malformed `artists` field is zero results, and individual entries that
//! cannot be coerced are dropped rather than failing the whole response.

use serde_json::Value;
use tunescout_core::ArtistSummary;

/// Path of the artist-search endpoint, appended to the configured base URL
pub(crate) const SEARCH_ARTIST_PATH: &str = "/api/search_artist";

/// Builds the full search URL for a query
pub(crate) fn search_url(base_url: &str, query: &str) -> String {
    format!(
        "{}{}?query={}",
        base_url.trim_end_matches('/'),
        SEARCH_ARTIST_PATH,
        urlencoding::encode(query)
    )
}

/// Extracts artist summaries from a parsed response body.
///
/// Never fails: shape problems degrade to fewer (or zero) results, logged.
pub fn parse_artists(body: &Value) -> Vec<ArtistSummary> {
    let entries = match body.get("artists").and_then(Value::as_array) {
        Some(entries) => entries,
        None => {
            log::warn!("Search response missing 'artists' field, treating as zero results");
            return Vec::new();
        }
    };

    entries
        .iter()
        .filter_map(|entry| {
            let artist = artist_from_value(entry);
            if artist.is_none() {
                log::debug!("Dropping malformed artist entry: {}", entry);
            }
            artist
        })
        .collect()
}

/// Coerces a single wire entry into an `ArtistSummary`.
///
/// `id` and `name` must be non-empty strings; everything else is optional.
fn artist_from_value(entry: &Value) -> Option<ArtistSummary> {
    let obj = entry.as_object()?;

    let id = obj.get("id").and_then(Value::as_str)?.trim();
    let name = obj.get("name").and_then(Value::as_str)?.trim();
    if id.is_empty() || name.is_empty() {
        return None;
    }

    let image_url = obj
        .get("images")
        .and_then(Value::as_array)
        .and_then(|images| {
            images
                .iter()
                .find_map(|image| image.get("url").and_then(Value::as_str))
        })
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string);

    let genres = obj
        .get("genres")
        .and_then(Value::as_array)
        .map(|genres| {
            genres
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let mut artist = ArtistSummary::new(id, name).with_genres(genres);
    if let Some(url) = image_url {
        artist = artist.with_image_url(url);
    }
    Some(artist)
}

// Helper module for URL encoding
mod urlencoding {
    /// Percent-encodes the UTF-8 bytes of `s`, so multi-byte codepoints
    /// survive intact
    pub fn encode(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for b in s.bytes() {
            match b {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                    out.push(b as char)
                }
                b' ' => out.push('+'),
                _ => out.push_str(&format!("%{:02X}", b)),
            }
        }
        out
    }
}
