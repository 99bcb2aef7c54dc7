//! Image search records as returned by the remote API.

use serde::Deserialize;

/// Fixed number of records the API is asked for per page.
pub const PAGE_SIZE: u32 = 40;

/// One image hit.
///
/// Sourced verbatim from the API response. No local identity is tracked, so
/// the same image can appear twice if the API repeats it across pages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageRecord {
    /// Medium-size preview (`webformatURL`).
    #[serde(rename = "webformatURL")]
    pub preview_url: String,
    /// Full-size image (`largeImageURL`).
    #[serde(rename = "largeImageURL")]
    pub full_url: String,
    /// Comma-separated tag list, e.g. `"cat, animal, pet"`.
    #[serde(default)]
    pub tags: String,
    /// Like count.
    #[serde(default)]
    pub likes: u64,
    /// View count.
    #[serde(default)]
    pub views: u64,
    /// Comment count.
    #[serde(default)]
    pub comments: u64,
    /// Download count.
    #[serde(default)]
    pub downloads: u64,
}

impl ImageRecord {
    /// Individual tags, trimmed, empty entries dropped.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

/// One fetched page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageResult {
    /// Hits on this page, in API order.
    #[serde(rename = "hits")]
    pub items: Vec<ImageRecord>,
    /// Number of hits the API is willing to page through for this term.
    #[serde(rename = "totalHits")]
    pub total_matches: u64,
}

impl PageResult {
    /// Parse an API response body.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// True when the page has no hits.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
