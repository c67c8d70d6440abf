//! Artist summary type

use serde::{Deserialize, Serialize};

/// The minimal projection of a search hit needed for display and selection.
///
/// Instances are built once at the network boundary and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistSummary {
    /// Opaque identifier assigned by the search service
    pub id: String,

    /// Display name
    pub name: String,

    /// URL of the primary artist image, if any
    pub image_url: Option<String>,

    /// Genre tags, in the order the service returned them
    #[serde(default)]
    pub genres: Vec<String>,
}

impl ArtistSummary {
    /// Creates a summary with no image and no genres
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_url: None,
            genres: Vec::new(),
        }
    }

    /// Sets the image URL
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Sets the genre tags
    pub fn with_genres(mut self, genres: Vec<String>) -> Self {
        self.genres = genres;
        self
    }

    /// Returns true if the summary carries a usable identity.
    ///
    /// Entries failing this check are dropped at the boundary, never stored.
    pub fn is_displayable(&self) -> bool {
        !self.id.trim().is_empty() && !self.name.trim().is_empty()
    }

    /// First genre tag, used as the one-line caption under the name
    pub fn primary_genre(&self) -> Option<&str> {
        self.genres.first().map(String::as_str)
    }
}
