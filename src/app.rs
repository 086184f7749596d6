//! App state and core application logic
//!
//! The view-state machine for the video list: fetch lifecycle, search query,
//! banner visibility, and the pure selection from status to rendered view.
//! All operations here are synchronous; the network runs in the event loop,
//! which feeds results back through [`App::apply_fetch`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::VideoSummary;
use crate::ui::theme::ThemeFlag;

// =============================================================================
// Fetch Status
// =============================================================================

/// Status of the one in-flight catalog listing.
///
/// The video list lives inside `Success`, so no rendering path can read it
/// in any other state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success(Vec<VideoSummary>),
    Failure,
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    pub fn videos(&self) -> Option<&[VideoSummary]> {
        match self {
            FetchStatus::Success(videos) => Some(videos),
            _ => None,
        }
    }
}

/// What the content area shows, selected purely from [`FetchStatus`]
#[derive(Debug, PartialEq, Eq)]
pub enum RenderedView<'a> {
    Nothing,
    Loading,
    Videos(&'a [VideoSummary]),
    NoResults,
    Failure,
}

// =============================================================================
// Fetch plumbing
// =============================================================================

/// A request the event loop should issue against the catalog service.
///
/// Produced by the operations that begin a fetch; by the time the intent is
/// returned, status has already transitioned to Loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchIntent {
    pub query: String,
}

/// Resolved result of one catalog request, delivered back to the app.
///
/// All error detail is absorbed before this point; the UI only learns the
/// binary failure state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded(Vec<VideoSummary>),
    Failed,
}

// =============================================================================
// Input Mode
// =============================================================================

/// Current input mode for keyboard handling
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Text input mode (search box focused)
    Editing,
}

// =============================================================================
// Search Field
// =============================================================================

/// Search text with a terminal cursor
#[derive(Debug, Clone, Default)]
pub struct SearchField {
    pub query: String,
    pub cursor: usize,
}

impl SearchField {
    /// Insert character at cursor
    pub fn insert(&mut self, c: char) {
        self.query.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.query[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor -= prev;
            self.query.remove(self.cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            let prev = self.query[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor -= prev;
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.query.len() {
            let next = self.query[self.cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor += next;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.query.len();
    }

    /// Replace the whole query, cursor at end
    pub fn set(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.cursor = self.query.len();
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.cursor = 0;
    }
}

// =============================================================================
// List selection
// =============================================================================

/// Selection state for the card list viewport
#[derive(Debug, Clone, Default)]
pub struct ListState {
    pub selected: usize,
    pub offset: usize,
    pub len: usize,
}

impl ListState {
    pub fn up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            if self.selected < self.offset {
                self.offset = self.selected;
            }
        }
    }

    pub fn down(&mut self) {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
        }
    }

    /// Keep the selected row inside a viewport of `visible` rows
    pub fn scroll_into_view(&mut self, visible: usize) {
        if visible == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + visible {
            self.offset = self.selected - visible + 1;
        }
    }

    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.selected = 0;
            self.offset = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Fetch lifecycle status; owns the video list in Success
    pub status: FetchStatus,
    /// Search text, mutated by user input and cleared by retry
    pub search: SearchField,
    /// Banner row visibility, independent of fetch status
    pub banner_visible: bool,
    /// Current input mode
    pub input_mode: InputMode,
    /// Shared dark-theme flag
    pub theme: ThemeFlag,
    /// Card list selection
    pub list: ListState,
    /// Whether the app is running
    pub running: bool,
}

impl App {
    pub fn new(theme: ThemeFlag) -> Self {
        Self {
            status: FetchStatus::Idle,
            search: SearchField::default(),
            banner_visible: true,
            input_mode: InputMode::Normal,
            theme,
            list: ListState::default(),
            running: true,
        }
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Called once when the view becomes active; begins the initial fetch
    pub fn initialize(&mut self) -> FetchIntent {
        self.begin_fetch(String::new())
    }

    /// Store new search text. Never triggers a fetch on its own.
    pub fn update_search_text(&mut self, text: impl Into<String>) {
        self.search.set(text);
    }

    /// Begin a fetch for the current search query
    pub fn submit_search(&mut self) -> FetchIntent {
        let query = self.search.query.clone();
        self.begin_fetch(query)
    }

    /// Clear the search query, then begin a fresh fetch.
    ///
    /// Used from both the failure view and the no-results view; the new
    /// request always starts over from an empty query.
    pub fn retry(&mut self) -> FetchIntent {
        self.search.clear();
        self.begin_fetch(String::new())
    }

    /// Toggle banner visibility. Has no effect on fetch status or videos.
    pub fn dismiss_banner(&mut self) {
        self.banner_visible = !self.banner_visible;
    }

    /// Transition to Loading before any I/O and hand the query to the
    /// event loop
    fn begin_fetch(&mut self, query: String) -> FetchIntent {
        self.status = FetchStatus::Loading;
        FetchIntent { query }
    }

    /// Apply a resolved fetch result.
    ///
    /// Outcomes are applied in arrival order: when two requests are in
    /// flight, the last response to land wins, regardless of which request
    /// was issued later.
    pub fn apply_fetch(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Loaded(videos) => {
                self.list.set_len(videos.len());
                self.status = FetchStatus::Success(videos);
            }
            FetchOutcome::Failed => {
                self.status = FetchStatus::Failure;
            }
        }
    }

    /// Select what the content area shows. Pure function of status.
    pub fn view(&self) -> RenderedView<'_> {
        match &self.status {
            FetchStatus::Idle => RenderedView::Nothing,
            FetchStatus::Loading => RenderedView::Loading,
            FetchStatus::Success(videos) if videos.is_empty() => RenderedView::NoResults,
            FetchStatus::Success(videos) => RenderedView::Videos(videos),
            FetchStatus::Failure => RenderedView::Failure,
        }
    }

    /// Whether the current view offers the retry affordance
    fn retry_available(&self) -> bool {
        matches!(
            self.view(),
            RenderedView::Failure | RenderedView::NoResults
        )
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle a key event; returns a fetch to issue, if the key began one
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FetchIntent> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return None;
        }

        match self.input_mode {
            InputMode::Editing => self.handle_editing_key(key),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> Option<FetchIntent> {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                None
            }
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                Some(self.submit_search())
            }
            KeyCode::Char(c) => {
                self.search.insert(c);
                None
            }
            KeyCode::Backspace => {
                self.search.backspace();
                None
            }
            KeyCode::Left => {
                self.search.cursor_left();
                None
            }
            KeyCode::Right => {
                self.search.cursor_right();
                None
            }
            KeyCode::Home => {
                self.search.cursor_home();
                None
            }
            KeyCode::End => {
                self.search.cursor_end();
                None
            }
            _ => None,
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Option<FetchIntent> {
        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                None
            }
            KeyCode::Char('/') | KeyCode::Char('s') => {
                self.input_mode = InputMode::Editing;
                None
            }
            KeyCode::Char('t') => {
                self.theme.toggle();
                None
            }
            KeyCode::Char('x') => {
                self.dismiss_banner();
                None
            }
            KeyCode::Char('r') if self.retry_available() => Some(self.retry()),
            KeyCode::Up | KeyCode::Char('k') => {
                self.list.up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.list.down();
                None
            }
            _ => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
