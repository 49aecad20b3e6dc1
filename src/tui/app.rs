//! The interactive application state machine.
//!
//! [`App`] owns every piece of UI state: the query text, the category
//! toggles, the loading flag, the last error line, and the flattened result
//! rows. One [`Message`] channel carries everything that can happen (key
//! and mouse input, spinner ticks, completed search outcomes) into the
//! sequential [`App::handle_message`] dispatch. Search work never runs on
//! the UI task: dispatching spawns a worker that performs the remote call
//! and sends exactly one [`Message::SearchCompleted`] back, so the loop
//! never blocks on network latency.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use ratatui::widgets::ListState;
use tokio::sync::mpsc;
use tracing::{debug, warn};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use crate::{
    error::Error,
    spotify,
    types::{ResultRow, SearchKind, SearchQuery, SearchResults},
    utils,
};

/// Longest accepted query text.
const INPUT_CHAR_LIMIT: usize = 156;

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Everything the UI loop can be woken by, as one tagged message type
/// consumed by a single dispatch function.
#[derive(Debug)]
pub enum Message {
    /// A terminal input event (key, mouse, resize).
    Input(Event),
    /// Spinner animation tick.
    Tick,
    /// The outcome of a dispatched search, delivered once per worker.
    SearchCompleted(Result<SearchResults, Error>),
}

/// Exactly one view is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Query building: text input plus category toggles.
    Search,
    /// Results browsing over the flattened row list.
    Results,
}

/// One toggleable category row of the query view.
#[derive(Debug, Clone)]
pub struct Choice {
    pub kind: SearchKind,
    pub selected: bool,
}

pub struct App {
    tx: mpsc::Sender<Message>,
    pub view: View,
    pub input: Input,
    pub choices: Vec<Choice>,
    pub cursor: usize,
    pub loading: bool,
    pub spinner_frame: usize,
    pub error: Option<String>,
    pub rows: Vec<ResultRow>,
    /// Indices into `rows` that survive the current filter, in order.
    pub visible: Vec<usize>,
    pub list_state: ListState,
    pub filter: Input,
    /// Whether the filter editor is capturing keys.
    pub filtering: bool,
    /// Workers ever spawned; observable by tests.
    pub searches_started: u64,
    pub should_quit: bool,
}

impl App {
    pub fn new(tx: mpsc::Sender<Message>) -> Self {
        App {
            tx,
            view: View::Search,
            input: Input::default(),
            choices: SearchKind::ALL
                .iter()
                .map(|&kind| Choice {
                    kind,
                    selected: false,
                })
                .collect(),
            cursor: 0,
            loading: false,
            spinner_frame: 0,
            error: None,
            rows: Vec::new(),
            visible: Vec::new(),
            list_state: ListState::default(),
            filter: Input::default(),
            filtering: false,
            searches_started: 0,
            should_quit: false,
        }
    }

    /// Sequential dispatch for every message the loop receives.
    pub fn handle_message(&mut self, msg: Message) {
        match msg {
            Message::Input(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                self.handle_key(key);
            }
            Message::Input(Event::Mouse(mouse)) => self.handle_mouse(mouse),
            Message::Input(_) => {}
            Message::Tick => {
                if self.loading {
                    self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
                }
            }
            Message::SearchCompleted(outcome) => self.apply_search_outcome(outcome),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.view {
            View::Search => self.handle_search_key(key),
            View::Results => self.handle_results_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            KeyCode::Down => {
                if self.cursor + 1 < self.choices.len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Left | KeyCode::Right => {
                let choice = &mut self.choices[self.cursor];
                choice.selected = !choice.selected;
            }
            KeyCode::Enter => self.dispatch_search(),
            _ => {
                let inserting =
                    matches!(key.code, KeyCode::Char(_)) && !key.modifiers.contains(KeyModifiers::CONTROL);
                let at_limit = self.input.value().chars().count() >= INPUT_CHAR_LIMIT;
                if !(inserting && at_limit) {
                    self.input.handle_event(&Event::Key(key));
                }
            }
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        if self.filtering {
            match key.code {
                KeyCode::Esc => {
                    self.filter.reset();
                    self.filtering = false;
                    self.refresh_visible();
                }
                KeyCode::Enter => {
                    self.filtering = false;
                }
                _ => {
                    self.filter.handle_event(&Event::Key(key));
                    self.refresh_visible();
                }
            }
            return;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Char('/') => {
                self.filtering = true;
            }
            KeyCode::Esc => {
                // An applied filter is cleared first; only a second esc
                // leaves the results view.
                if !self.filter.value().is_empty() {
                    self.filter.reset();
                    self.refresh_visible();
                } else {
                    self.view = View::Search;
                }
            }
            KeyCode::Char('q') => {
                self.view = View::Search;
            }
            KeyCode::Enter | KeyCode::Char('o') => self.open_selected(),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.view != View::Results {
            return;
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => self.select_previous(),
            MouseEventKind::ScrollDown => self.select_next(),
            _ => {}
        }
    }

    /// Validates the current query and either records an inline error or
    /// starts exactly one background search. Re-dispatch is gated on
    /// `loading`; the gate and the flag live in the same sequential
    /// dispatch, so a queued key event cannot slip between check and set.
    fn dispatch_search(&mut self) {
        if self.loading {
            return;
        }

        let query = match self.validate_query() {
            Ok(query) => query,
            Err(e) => {
                self.error = Some(e.user_message());
                return;
            }
        };

        self.error = None;
        self.loading = true;
        self.spinner_frame = 0;
        self.searches_started += 1;
        debug!(text = %query.text, "starting search worker");

        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = spotify::search::search(&query).await;
            // The receiver only disappears when the app is shutting down.
            let _ = tx.send(Message::SearchCompleted(outcome)).await;
        });
    }

    /// Local validation; failures never reach the network.
    fn validate_query(&self) -> Result<SearchQuery, Error> {
        if self.input.value().is_empty() {
            return Err(Error::Validation("Please enter a search term"));
        }

        let kinds: Vec<SearchKind> = self
            .choices
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.kind)
            .collect();
        if kinds.is_empty() {
            return Err(Error::Validation("Please select at least one category"));
        }

        Ok(SearchQuery {
            text: self.input.value().to_string(),
            kinds,
            ..SearchQuery::default()
        })
    }

    fn apply_search_outcome(&mut self, outcome: Result<SearchResults, Error>) {
        self.loading = false;

        match outcome {
            Ok(results) => {
                self.rows = utils::compose_result_rows(&results);
                self.filter.reset();
                self.filtering = false;
                // Selection starts over at the first row of a fresh result.
                self.list_state.select(None);
                self.refresh_visible();
                self.view = View::Results;
            }
            Err(e) => {
                warn!(error = %e, "search failed");
                self.error = Some(e.user_message());
            }
        }
    }

    /// Recomputes the filtered index list and keeps the selection in range.
    fn refresh_visible(&mut self) {
        self.visible = utils::filter_row_indices(&self.rows, self.filter.value());
        if self.visible.is_empty() {
            self.list_state.select(None);
        } else {
            let selected = self
                .list_state
                .selected()
                .map(|s| s.min(self.visible.len() - 1))
                .unwrap_or(0);
            self.list_state.select(Some(selected));
        }
    }

    fn select_previous(&mut self) {
        if let Some(selected) = self.list_state.selected() {
            if selected > 0 {
                self.list_state.select(Some(selected - 1));
            }
        }
    }

    fn select_next(&mut self) {
        if let Some(selected) = self.list_state.selected() {
            if selected + 1 < self.visible.len() {
                self.list_state.select(Some(selected + 1));
            }
        }
    }

    /// Row currently under the selection, after filtering.
    pub fn selected_row(&self) -> Option<&ResultRow> {
        let selected = self.list_state.selected()?;
        let index = *self.visible.get(selected)?;
        self.rows.get(index)
    }

    fn open_selected(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        if row.url.is_empty() {
            return;
        }
        if let Err(e) = webbrowser::open(&row.url) {
            warn!(error = %e, url = %row.url, "failed to open browser");
        }
    }
}
