//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod gallery;
mod help;
mod search_input;
mod status_bar;
mod styles;

pub use gallery::{truncate_to_width, viewport_cards, GalleryView};
pub use help::render_help_overlay;
pub use search_input::SearchInput;
pub use status_bar::{status_line, StatusInfo};
pub use styles::{ColorConfig, GalleryStyles};

use crate::config::keybindings::KeyBindings;
use crate::gallery::{FetchRequest, Gallery, GalleryController, GallerySurface, Phase};
use crate::model::KeyAction;
use crate::search::FetchExecutor;
use crate::state::{search_input_handler, AppState, InputMode};
use constants::{EVENT_POLL_INTERVAL, SEARCH_BAR_HEIGHT, STATUS_BAR_HEIGHT};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Instant;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend, and over the
/// executor so tests can run fetches inline.
pub struct TuiApp<B, E>
where
    B: Backend,
    E: FetchExecutor,
{
    terminal: Terminal<B>,
    app_state: AppState,
    controller: GalleryController<Gallery>,
    executor: E,
    key_bindings: KeyBindings,
    styles: GalleryStyles,
    /// Cards that fit in the gallery pane at the last draw.
    viewport_cards: usize,
}

impl<E: FetchExecutor> TuiApp<CrosstermBackend<Stdout>, E> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(executor: E, colors: ColorConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let terminal = restore_on_error(
            || {
                let mut stdout = io::stdout();
                stdout.execute(EnterAlternateScreen)?;
                Ok(Terminal::new(CrosstermBackend::new(stdout))?)
            },
            restore_terminal,
        )?;

        Ok(Self::with_terminal(
            terminal,
            executor,
            KeyBindings::default(),
            GalleryStyles::with_color_config(colors),
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Wakes at least every
    /// `EVENT_POLL_INTERVAL` to pick up finished fetches.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if event::poll(EVENT_POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                    }
                    Event::Resize(width, height) => {
                        debug!("Handling resize to {}x{}", width, height);
                    }
                    _ => {}
                }
            }

            self.pump(Instant::now());
            self.draw()?;
        }
    }
}

impl<B, E> TuiApp<B, E>
where
    B: Backend,
    E: FetchExecutor,
{
    fn with_terminal(
        terminal: Terminal<B>,
        executor: E,
        key_bindings: KeyBindings,
        styles: GalleryStyles,
    ) -> Self {
        Self {
            terminal,
            app_state: AppState::default(),
            controller: GalleryController::new(Gallery::new()),
            executor,
            key_bindings,
            styles,
            viewport_cards: 1,
        }
    }

    /// Gallery contents, for export after the loop ends.
    pub fn gallery(&self) -> &Gallery {
        self.controller.surface()
    }

    /// Term behind the gallery currently shown, if any search was made.
    pub fn current_term(&self) -> Option<&str> {
        Some(self.controller.query().term()).filter(|term| !term.is_empty())
    }

    /// Gallery and term as they stand now.
    pub fn snapshot(&self) -> GallerySnapshot {
        GallerySnapshot {
            gallery: self.gallery().clone(),
            term: self.current_term().map(str::to_string),
        }
    }

    /// Submit `term` as if typed into the search bar.
    pub fn start_search(&mut self, term: &str) {
        self.app_state.search_field = search_input_handler::SearchField::with_text(term);
        self.submit_search();
    }

    /// Apply finished fetches and surface the notices they produced.
    fn pump(&mut self, now: Instant) {
        for completion in self.executor.poll() {
            self.controller.complete(completion);
        }
        for notice in self.controller.take_notices() {
            self.app_state.post_notice(notice, now);
        }
        self.app_state.expire_banner(now);
    }

    fn dispatch(&mut self, request: Option<FetchRequest>) {
        if let Some(request) = request {
            debug!(
                generation = request.generation(),
                page = request.query().page(),
                "Submitting fetch"
            );
            self.executor.submit(request);
        }
    }

    fn submit_search(&mut self) {
        let term = self.app_state.search_field.text().to_string();
        let request = self.controller.submit_search(&term);
        if request.is_some() {
            self.app_state.scroll.reset();
            self.app_state.input_mode = InputMode::Browsing;
        }
        self.dispatch(request);
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even while typing
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.help_visible && key.code == KeyCode::Esc {
            self.app_state.help_visible = false;
            return false;
        }

        if self.app_state.is_typing() {
            self.handle_typing_key(key);
            return false;
        }

        let action = match self.key_bindings.get(key) {
            Some(action) => action,
            None => return false,
        };

        // Help overlay swallows everything but its toggle and quit
        if self.app_state.help_visible && !matches!(action, KeyAction::Help | KeyAction::Quit) {
            return false;
        }

        let len = self.controller.surface().len();
        let viewport = self.viewport_cards;
        match action {
            KeyAction::SelectNext => self.app_state.scroll.select_next(len),
            KeyAction::SelectPrev => self.app_state.scroll.select_prev(len),
            KeyAction::PageDown => self.app_state.scroll.page_down(len, viewport),
            KeyAction::PageUp => self.app_state.scroll.page_up(len, viewport),
            KeyAction::SelectFirst => self.app_state.scroll.select_first(len),
            KeyAction::SelectLast => self.app_state.scroll.select_last(len),
            KeyAction::Quit => return true,
            KeyAction::Help => self.app_state.help_visible = !self.app_state.help_visible,
            KeyAction::StartSearch => self.app_state.input_mode = InputMode::Typing,
            KeyAction::LoadMore => {
                let request = self.controller.trigger_load_more();
                self.dispatch(request);
            }
        }

        false
    }

    fn handle_typing_key(&mut self, key: KeyEvent) {
        let field = self.app_state.search_field.clone();
        self.app_state.search_field = match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                search_input_handler::handle_char_input(field, ch)
            }
            KeyCode::Backspace => search_input_handler::handle_backspace(field),
            KeyCode::Left => search_input_handler::handle_cursor_left(field),
            KeyCode::Right => search_input_handler::handle_cursor_right(field),
            KeyCode::Enter => {
                self.submit_search();
                return;
            }
            KeyCode::Esc => {
                self.app_state.input_mode = InputMode::Browsing;
                return;
            }
            _ => field,
        };
    }

    /// Render the current frame, then report the visible cards to the
    /// controller so the visibility sensor can request the next page.
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let (_, gallery_area, _) = split_screen(Rect::new(0, 0, size.width, size.height));

        let len = self.controller.surface().len();
        self.viewport_cards =
            viewport_cards(gallery_area.height, self.controller.load_more_visible());
        self.app_state.scroll.ensure_visible(len, self.viewport_cards);
        let visible = self.app_state.scroll.visible_range(len, self.viewport_cards);

        let app_state = &self.app_state;
        let controller = &self.controller;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            render_layout(frame, app_state, controller, styles, visible.clone());
        })?;

        let request = self.controller.on_visible(visible);
        self.dispatch(request);

        Ok(())
    }
}

/// Search bar, gallery pane, status bar.
fn split_screen(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SEARCH_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

fn render_layout(
    frame: &mut Frame,
    state: &AppState,
    controller: &GalleryController<Gallery>,
    styles: &GalleryStyles,
    visible: std::ops::Range<usize>,
) {
    let (search_area, gallery_area, status_area) = split_screen(frame.area());

    frame.render_widget(
        SearchInput::new(&state.search_field, state.is_typing()),
        search_area,
    );

    let gallery = controller.surface();
    frame.render_widget(
        GalleryView::new(gallery.items(), styles)
            .visible(visible)
            .selected(state.scroll.selected())
            .show_load_more(controller.load_more_visible())
            .loading(controller.phase() == Phase::Fetching),
        gallery_area,
    );

    let status = status_line(
        StatusInfo {
            banner: state.banner(),
            phase: controller.phase(),
            loaded: gallery.len(),
            total: controller.total_matches(),
            typing: state.is_typing(),
        },
        styles,
    );
    frame.render_widget(Paragraph::new(status), status_area);

    if state.help_visible {
        render_help_overlay(frame);
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.
//
// DO NOT use these in production code.

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used in every test
impl<B, E> TuiApp<B, E>
where
    B: Backend,
    E: FetchExecutor,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(terminal: Terminal<B>, executor: E) -> Self {
        Self::with_terminal(
            terminal,
            executor,
            KeyBindings::default(),
            GalleryStyles::with_color_config(ColorConfig::from_env_and_args(true)),
        )
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn controller(&self) -> &GalleryController<Gallery> {
        &self.controller
    }

    pub(crate) fn executor(&self) -> &E {
        &self.executor
    }

    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// One loop iteration without waiting for input: apply completions,
    /// then draw.
    pub(crate) fn tick_test(&mut self, now: Instant) -> Result<(), TuiError> {
        self.pump(now);
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Start-up options for the TUI.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Submitted as soon as the TUI starts.
    pub initial_query: Option<String>,
    /// Disable colors.
    pub no_color: bool,
}

/// What the TUI leaves behind when it exits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GallerySnapshot {
    /// Cards loaded at exit.
    pub gallery: Gallery,
    /// Term the gallery was loaded for. `None` if nothing was searched.
    pub term: Option<String>,
}

/// Initialize and run the TUI application.
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit even if the loop failed. Returns the final gallery and its term.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_executor<E: FetchExecutor>(
    executor: E,
    args: CliArgs,
) -> Result<GallerySnapshot, TuiError> {
    let mut app = TuiApp::new(executor, ColorConfig::from_env_and_args(args.no_color))?;

    if let Some(term) = args.initial_query.as_deref() {
        app.start_search(term);
    }

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result.map(|()| app.snapshot())
}

/// Run `init`, calling `restore` if it fails so a half-initialised terminal
/// is not left in raw mode.
fn restore_on_error<T>(
    init: impl FnOnce() -> Result<T, TuiError>,
    restore: impl FnOnce() -> Result<(), TuiError>,
) -> Result<T, TuiError> {
    init().inspect_err(|_| {
        if let Err(err) = restore() {
            debug!(error = %err, "Failed to restore terminal after setup error");
        }
    })
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
