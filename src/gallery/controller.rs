//! Gallery orchestration: search submission, paginated loading, and
//! end-of-results detection.
//!
//! # State Machine
//!
//! ```text
//!            submit_search(term)                 complete(ok, more pages)
//!   Idle ─────────────────────────▶ Fetching ─────────────────────────────▶ Idle
//!    ▲  ◀──────── trigger_load_more ──┘  │ complete(err) ──────────────────▶ Idle
//!    │                                   │ complete(ok, no more pages)
//!    │                                   ▼
//!    └────────── submit_search ──── Exhausted
//! ```
//!
//! A fetch is split in two halves so the shell can run it off the UI thread:
//! starting one returns a [`FetchRequest`] carrying a snapshot of the query
//! state, and the resulting [`FetchCompletion`] is handed back to
//! [`GalleryController::complete`]. While a fetch is pending every load-more
//! trigger is rejected, so a page is never requested twice concurrently.
//!
//! Each new search bumps a generation counter. A completion from an older
//! generation belongs to a superseded search and is dropped.

use super::render::GallerySurface;
use super::sensor::VisibilitySensor;
use crate::model::{FetchError, PageResult, PAGE_SIZE};
use crate::search::{QueryState, SearchClient, Transport};
use std::fmt;
use std::ops::Range;
use tracing::{debug, info, warn};

/// Controller phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ready for a search or the next page.
    Idle,
    /// A fetch is in flight; load-more triggers are ignored.
    Fetching,
    /// Every page for the current term has been loaded.
    Exhausted,
}

/// User-facing notice produced by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The submitted term was blank.
    EmptyQuery,
    /// A new search matched nothing.
    NoResults,
    /// A new search found this many images.
    Found(u64),
    /// Every page for the term has been loaded.
    EndOfResults,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::EmptyQuery => write!(f, "Please, type something!"),
            Notice::NoResults => write!(
                f,
                "Sorry, there are no images matching your search query. Please try again."
            ),
            Notice::Found(total) => write!(f, "Hooray! We found {total} images."),
            Notice::EndOfResults => write!(
                f,
                "We're sorry, but you've reached the end of search results."
            ),
        }
    }
}

/// A fetch the controller wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    generation: u64,
    query: QueryState,
}

impl FetchRequest {
    /// Search generation the request belongs to.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Query snapshot the fetch will use.
    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Run the fetch on the calling thread.
    pub fn execute<T: Transport>(mut self, client: &SearchClient<T>) -> FetchCompletion {
        let outcome = client.fetch_page(&mut self.query);
        FetchCompletion {
            generation: self.generation,
            query: self.query,
            outcome,
        }
    }
}

/// Result of a [`FetchRequest`], to be handed back to the controller.
///
/// `query` is the request's snapshot after the fetch: advanced by one page on
/// success, untouched on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCompletion {
    /// Generation copied from the request.
    pub generation: u64,
    /// Query snapshot after the fetch.
    pub query: QueryState,
    /// The fetched page, or why it failed.
    pub outcome: Result<PageResult, FetchError>,
}

/// Orchestrates searches and page loads against a display surface.
#[derive(Debug)]
pub struct GalleryController<S: GallerySurface> {
    query: QueryState,
    phase: Phase,
    generation: u64,
    /// The pending fetch is the first page of a new search.
    fresh_search: bool,
    /// Total reported by the last successful non-empty page.
    total_matches: Option<u64>,
    load_more_visible: bool,
    sensor: VisibilitySensor,
    surface: S,
    notices: Vec<Notice>,
}

impl<S: GallerySurface> GalleryController<S> {
    /// Idle controller with nothing searched yet.
    pub fn new(surface: S) -> Self {
        Self {
            query: QueryState::new(),
            phase: Phase::Idle,
            generation: 0,
            fresh_search: false,
            total_matches: None,
            load_more_visible: false,
            sensor: VisibilitySensor::new(),
            surface,
            notices: Vec::new(),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current term and the next page to request.
    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// The display surface results are appended to.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Sensor watching the newest card.
    pub fn sensor(&self) -> &VisibilitySensor {
        &self.sensor
    }

    /// Whether the manual load-more control should be shown.
    pub fn load_more_visible(&self) -> bool {
        self.load_more_visible
    }

    /// Total reported for the current term, once a page has arrived.
    pub fn total_matches(&self) -> Option<u64> {
        self.total_matches
    }

    /// Drain notices produced since the last call, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Start a new search.
    ///
    /// A blank term only produces [`Notice::EmptyQuery`]. Otherwise the
    /// gallery is cleared, the page cursor reset, and the first page
    /// requested. A search submitted while another fetch is pending
    /// supersedes it.
    pub fn submit_search(&mut self, raw: &str) -> Option<FetchRequest> {
        let mut query = QueryState::new();
        if query.set_term(raw).is_err() {
            debug!("Rejected blank search term");
            self.notices.push(Notice::EmptyQuery);
            return None;
        }

        self.surface.clear();
        self.sensor.unobserve();
        self.load_more_visible = false;
        self.total_matches = None;
        query.reset_page();
        self.query = query;
        self.fresh_search = true;

        info!(term = %self.query.term(), "Starting search");
        Some(self.begin_fetch())
    }

    /// Request the next page, from the load-more control or the visibility
    /// sensor.
    ///
    /// No-op unless the controller is `Idle` with results already loaded for
    /// the current term.
    pub fn trigger_load_more(&mut self) -> Option<FetchRequest> {
        match self.phase {
            Phase::Fetching => {
                debug!("Load more ignored: fetch already pending");
                return None;
            }
            Phase::Exhausted => {
                debug!("Load more ignored: results exhausted");
                return None;
            }
            Phase::Idle => {}
        }
        if self.total_matches.is_none() {
            debug!("Load more ignored: nothing loaded yet");
            return None;
        }

        debug!(page = self.query.page(), "Loading next page");
        Some(self.begin_fetch())
    }

    /// Feed the range of gallery indices currently on screen.
    ///
    /// When the newest card becomes visible the sensor fires once and the
    /// next page is requested.
    pub fn on_visible(&mut self, visible: Range<usize>) -> Option<FetchRequest> {
        if self.sensor.report(visible) {
            self.trigger_load_more()
        } else {
            None
        }
    }

    /// Apply the outcome of a fetch started by this controller.
    pub fn complete(&mut self, completion: FetchCompletion) {
        if completion.generation != self.generation || self.phase != Phase::Fetching {
            debug!(
                generation = completion.generation,
                current = self.generation,
                "Discarding stale fetch completion"
            );
            return;
        }

        let fresh = std::mem::take(&mut self.fresh_search);

        let page = match completion.outcome {
            Ok(page) => page,
            Err(err) => {
                warn!(
                    error = %err,
                    term = %self.query.term(),
                    page = self.query.page(),
                    "Fetch failed"
                );
                self.phase = Phase::Idle;
                return;
            }
        };

        self.query = completion.query;

        if page.is_empty() {
            self.load_more_visible = false;
            self.sensor.unobserve();
            if fresh {
                self.notices.push(Notice::NoResults);
                self.phase = Phase::Idle;
            } else {
                self.notices.push(Notice::EndOfResults);
                self.phase = Phase::Exhausted;
            }
            return;
        }

        let total = page.total_matches;
        self.total_matches = Some(total);
        self.surface.append(&page.items);
        self.sensor.observe(self.surface.len() - 1);

        if fresh {
            self.notices.push(Notice::Found(total));
        }

        // A full first page always offers more; a short one ends the search
        // only when it covers the whole total.
        let short_page = page.items.len() < PAGE_SIZE as usize;
        let exhausted = self.query.is_exhausted(total) && (!fresh || short_page);

        if exhausted {
            info!(loaded = self.surface.len(), total, "Reached end of results");
            self.sensor.unobserve();
            self.load_more_visible = false;
            self.notices.push(Notice::EndOfResults);
            self.phase = Phase::Exhausted;
        } else {
            self.load_more_visible = true;
            self.phase = Phase::Idle;
        }
    }

    fn begin_fetch(&mut self) -> FetchRequest {
        self.generation += 1;
        self.phase = Phase::Fetching;
        FetchRequest {
            generation: self.generation,
            query: self.query.clone(),
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
