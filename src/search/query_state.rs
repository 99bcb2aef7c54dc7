//! Current search term and page cursor.

use crate::model::{EmptyQueryError, PAGE_SIZE};

/// Search term plus 1-indexed page cursor.
///
/// The page is the *next* page to request: it starts at 1 and is advanced by
/// [`SearchClient::fetch_page`](crate::search::SearchClient::fetch_page) after
/// each successful fetch, so `page - 1` pages have been fetched for the term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    term: String,
    page: u32,
}

impl QueryState {
    /// Empty term, page 1.
    pub fn new() -> Self {
        Self {
            term: String::new(),
            page: 1,
        }
    }

    /// Store a new term, trimmed.
    ///
    /// Blank input is rejected and the state is left untouched. The page is
    /// not reset here; a new search calls [`reset_page`](Self::reset_page).
    pub fn set_term(&mut self, raw: &str) -> Result<(), EmptyQueryError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EmptyQueryError);
        }
        self.term = trimmed.to_string();
        Ok(())
    }

    /// Back to page 1.
    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    /// Advance the cursor after a successful fetch.
    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Current term, trimmed.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Next page to request.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Pages already fetched for the current term.
    pub fn fetched_pages(&self) -> u32 {
        self.page - 1
    }

    /// True once every page the API reports has been fetched.
    pub fn is_exhausted(&self, total_matches: u64) -> bool {
        u64::from(self.fetched_pages()) * u64::from(PAGE_SIZE) >= total_matches
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new()
    }
}
