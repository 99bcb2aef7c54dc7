//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! `TuiApp<TestBackend, InlineExecutor<ScriptedTransport>>` with convenient
//! methods for simulating user interactions. Fetches run inline against
//! scripted HTTP responses, so every scenario is deterministic.

use crate::gallery::{Gallery, GalleryController};
use crate::model::TransportError;
use crate::search::{ApiConfig, HttpResponse, InlineExecutor, ScriptedTransport, SearchClient};
use crate::state::AppState;
use crate::view::{TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::Instant;

type ScriptedResponse = Result<HttpResponse, TransportError>;

/// A page of `count` hits numbered from `first`, reporting `total` matches.
///
/// Hit `n` has tags `"image-n"` so tests can find it on screen.
pub fn page_response(first: usize, count: usize, total: u64) -> ScriptedResponse {
    let hits: Vec<String> = (first..first + count)
        .map(|n| {
            format!(
                r#"{{"webformatURL":"https://cdn.test/{n}_640.jpg","largeImageURL":"https://cdn.test/{n}_1280.jpg","tags":"image-{n}","likes":{n},"views":{v},"comments":1,"downloads":2}}"#,
                v = n * 10
            )
        })
        .collect();
    Ok(HttpResponse::ok(format!(
        r#"{{"total":{total},"totalHits":{total},"hits":[{}]}}"#,
        hits.join(",")
    )))
}

/// A network failure.
pub fn failed_response() -> ScriptedResponse {
    Err(TransportError::new("connection reset"))
}

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty trailing lines are removed to keep snapshots clean.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend, InlineExecutor<ScriptedTransport>>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Harness with default terminal size (80x24) serving `responses` in
    /// order.
    pub fn with_responses(responses: Vec<ScriptedResponse>) -> Result<Self, TuiError> {
        Self::with_responses_and_size(responses, 80, 24)
    }

    /// Harness with custom terminal size
    pub fn with_responses_and_size(
        responses: Vec<ScriptedResponse>,
        width: u16,
        height: u16,
    ) -> Result<Self, TuiError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;

        let client = SearchClient::new(
            ApiConfig {
                base_url: "https://pixabay.test/api".to_string(),
                api_key: "test-key".to_string(),
            },
            ScriptedTransport::new(responses),
        );

        let app = TuiApp::new_for_test(terminal, InlineExecutor::new(client));

        Ok(Self { app, running: true })
    }

    /// Send a single key event
    ///
    /// # Returns
    /// * `true` - If app quit as a result of this key
    /// * `false` - If app is still running
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Type text (sends individual character key events)
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break; // Quit encountered
            }
        }
    }

    /// Open the search bar, type `term`, press Enter, and let the first
    /// page arrive.
    pub fn search(&mut self, term: &str) {
        self.send_key(KeyCode::Char('/'));
        self.type_text(term);
        self.send_key(KeyCode::Enter);
        self.tick();
    }

    /// One event-loop iteration: apply finished fetches, then draw.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        self.app
            .tick_test(now)
            .expect("Rendering should succeed in test harness");
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    pub fn controller(&self) -> &GalleryController<Gallery> {
        self.app.controller()
    }

    /// Page numbers requested from the API so far, in order.
    pub fn requested_pages(&self) -> Vec<u32> {
        self.app.executor().client().transport().requested_pages()
    }

    /// Check if app is still running (didn't quit)
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// Note that drawing reports the visible cards to the controller, which
    /// may start a fetch; call `tick` to apply it.
    pub fn render_to_string(&mut self) -> String {
        self.tick();
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_to_string_trims_trailing_blank_lines() {
        let mut buffer = ratatui::buffer::Buffer::empty(ratatui::layout::Rect::new(0, 0, 5, 3));
        buffer.set_string(0, 0, "ab", ratatui::style::Style::default());

        assert_eq!(buffer_to_string(&buffer), "ab");
    }

    #[test]
    fn page_response_numbers_hits_from_first() {
        let response = page_response(41, 2, 85).unwrap();
        let page = crate::model::PageResult::from_json(&response.body).unwrap();

        assert_eq!(page.total_matches, 85);
        assert_eq!(page.items[0].tags, "image-41");
        assert_eq!(page.items[1].tags, "image-42");
    }

    #[test]
    fn harness_starts_running_with_empty_gallery() {
        let mut harness = AcceptanceTestHarness::with_responses(vec![]).unwrap();

        assert!(harness.is_running());
        assert!(harness.render_to_string().contains("Press / to search"));
        assert!(harness.requested_pages().is_empty());
    }
}
