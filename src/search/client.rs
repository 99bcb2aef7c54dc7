//! Single-page fetches against the image search API.

use super::query_state::QueryState;
use super::transport::Transport;
use crate::model::{FetchError, PageResult, TransportError, PAGE_SIZE};
use reqwest::Url;
use tracing::{debug, instrument};

/// Endpoint and credentials for the image API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Endpoint, e.g. `https://pixabay.com/api`.
    pub base_url: String,
    /// API key sent as the `key` parameter.
    pub api_key: String,
}

/// Search client bound to one transport.
#[derive(Debug)]
pub struct SearchClient<T: Transport> {
    api: ApiConfig,
    transport: T,
}

impl<T: Transport> SearchClient<T> {
    /// Client for `api` over `transport`.
    pub fn new(api: ApiConfig, transport: T) -> Self {
        Self { api, transport }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build the request URL for the state's term and page.
    ///
    /// Content filters are fixed: photos only, horizontal, safe search on,
    /// [`PAGE_SIZE`] per page.
    pub fn request_url(&self, state: &QueryState) -> Result<Url, FetchError> {
        let base = format!("{}/", self.api.base_url.trim_end_matches('/'));
        let page = state.page().to_string();
        let per_page = PAGE_SIZE.to_string();
        Url::parse_with_params(
            &base,
            &[
                ("key", self.api.api_key.as_str()),
                ("q", state.term()),
                ("image_type", "photo"),
                ("orientation", "horizontal"),
                ("safesearch", "true"),
                ("per_page", per_page.as_str()),
                ("page", page.as_str()),
            ],
        )
        .map_err(|e| FetchError::Transport(TransportError::new(e.to_string())))
    }

    /// Fetch the page `state` points at.
    ///
    /// Advances `state` to the next page only when a page was actually
    /// received and decoded; on any error the cursor is left where it was.
    #[instrument(skip(self, state), fields(term = %state.term(), page = state.page()))]
    pub fn fetch_page(&self, state: &mut QueryState) -> Result<PageResult, FetchError> {
        let url = self.request_url(state)?;
        let response = self.transport.get(&url)?;

        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
                url: redact_key(&url),
            });
        }

        let page = PageResult::from_json(&response.body).map_err(|e| FetchError::Decode {
            message: e.to_string(),
        })?;

        debug!(
            items = page.items.len(),
            total_matches = page.total_matches,
            "Fetched page"
        );

        state.next_page();
        Ok(page)
    }
}

/// Render a URL with the `key` parameter masked, for logs and errors.
fn redact_key(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "key" { "***".to_string() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
