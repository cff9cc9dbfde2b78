//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod layout;
pub mod plain;
mod styles;
pub mod table;

pub use layout::{Screen, render_layout, table_body_height};
pub use plain::{PrintOptions, render_plain_table, run_print};
pub use styles::{ColorConfig, TableStyles};
pub use table::{TableRow, TableView, subscribe_table};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{Entity, KeyAction, NetworkError};
use crate::source::{FetchHandle, FetchStatus, HttpPageSource, spawn_fetch};
use crate::state::input_handler::{pop_filter_char, push_filter_char, step_multiplier};
use crate::state::{EventKind, InputField, Store, SubscriptionId, Transition, UiState};
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::Rect,
};
use std::cell::RefCell;
use std::io::{self, Stdout};
use std::rc::Rc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// The HTTP client could not be set up
    #[error("Network setup error: {0}")]
    Network(#[from] NetworkError),
}

/// Progress of the initial fetch, as shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Fetch in flight.
    Loading,
    /// Fetch finished with `total` entities.
    Loaded {
        /// Size of the full collection.
        total: usize,
    },
    /// Fetch failed; the message is shown instead of the table.
    Failed(String),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    store: Store,
    table: Rc<RefCell<TableView>>,
    /// Handlers `table` registered on `store`
    subscriptions: Vec<(EventKind, SubscriptionId)>,
    /// Full collection; empty until the fetch completes
    entities: Vec<Entity>,
    load: LoadState,
    fetch: Option<FetchHandle>,
    focus: InputField,
    key_bindings: KeyBindings,
    styles: TableStyles,
    spinner_frame: usize,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(fetch: FetchHandle, styles: TableStyles) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        Self::with_backend(CrosstermBackend::new(stdout), Some(fetch), styles)
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Create an application drawing to `backend`.
    ///
    /// With `fetch` set to `None` the table stays in the loading state until
    /// [`TuiApp::on_fetch_result`] is called.
    pub fn with_backend(
        backend: B,
        fetch: Option<FetchHandle>,
        styles: TableStyles,
    ) -> Result<Self, TuiError> {
        let terminal = Terminal::new(backend)?;
        let mut store = Store::new();
        let table = Rc::new(RefCell::new(TableView::new(store.state().multiplier)));
        let subscriptions = subscribe_table(&mut store, &table);

        Ok(Self {
            terminal,
            store,
            table,
            subscriptions,
            entities: Vec::new(),
            load: LoadState::Loading,
            fetch,
            focus: InputField::default(),
            key_bindings: KeyBindings::default(),
            styles,
            spinner_frame: 0,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (Ctrl+C). The fetch channel is checked on
    /// every iteration; the screen is redrawn after input, on resize, when the
    /// fetch completes, and on each tick while loading.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const TICK_INTERVAL: Duration = Duration::from_millis(100);

        self.draw()?;

        loop {
            let mut dirty = self.poll_fetch();

            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        dirty = true;
                    }
                    Event::Resize(_, _) => dirty = true,
                    _ => {}
                }
            } else if self.load == LoadState::Loading {
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
                dirty = true;
            }

            if dirty {
                self.draw()?;
            }
        }
    }

    /// Detach the table's handlers from the store. Returns how many were
    /// removed; later calls remove nothing.
    pub fn shutdown(&mut self) -> usize {
        let removed = self
            .subscriptions
            .drain(..)
            .filter(|(kind, id)| self.store.unsubscribe(*kind, *id))
            .count();
        debug!(removed, "Table handlers detached");
        removed
    }

    /// Take the fetch result if it has arrived. Returns whether it had.
    pub fn poll_fetch(&mut self) -> bool {
        let Some(handle) = &self.fetch else {
            return false;
        };
        match handle.poll() {
            FetchStatus::Pending => false,
            FetchStatus::Done(result) => {
                self.fetch = None;
                self.on_fetch_result(result);
                true
            }
        }
    }

    /// Apply a finished fetch.
    ///
    /// Success stores the collection and dispatches `Initialize`, which
    /// filters with the filter current at this moment. Failure is logged and
    /// shown in the status bar; the table stays empty.
    pub fn on_fetch_result(&mut self, result: Result<Vec<Entity>, NetworkError>) {
        match result {
            Ok(entities) => {
                info!(count = entities.len(), "Entities loaded");
                self.entities = entities;
                self.load = LoadState::Loaded {
                    total: self.entities.len(),
                };
                self.store.dispatch(Transition::Initialize {
                    entities: &self.entities,
                });
            }
            Err(err) => {
                error!(error = %err, url = err.url().unwrap_or("-"), "Fetching entities failed");
                self.load = LoadState::Failed(err.to_string());
            }
        }
    }

    /// Handle a key event. Returns `true` if the application should quit.
    ///
    /// Bound keys are resolved first; remaining characters and Backspace edit
    /// the focused field.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }

        if let Some(action) = self.key_bindings.get(key) {
            return self.handle_action(action);
        }

        match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.handle_char(ch)
            }
            KeyCode::Backspace => self.handle_backspace(),
            _ => false,
        }
    }

    fn handle_action(&mut self, action: KeyAction) -> bool {
        debug!(?action, focus = ?self.focus, "Key action");
        match action {
            KeyAction::Quit => return true,
            KeyAction::Reset => {
                self.store.dispatch(Transition::Reset {
                    entities: &self.entities,
                });
            }
            KeyAction::FocusNext => self.focus = self.focus.next(),
            KeyAction::FocusPrev => self.focus = self.focus.prev(),
            KeyAction::IncrementMultiplier => self.step_multiplier(1.0),
            KeyAction::DecrementMultiplier => self.step_multiplier(-1.0),
            KeyAction::ScrollUp => match self.focus {
                InputField::Multiplier => self.step_multiplier(1.0),
                InputField::Filter => self.scroll_table(-1),
            },
            KeyAction::ScrollDown => match self.focus {
                InputField::Multiplier => self.step_multiplier(-1.0),
                InputField::Filter => self.scroll_table(1),
            },
            KeyAction::PageUp => {
                let page = isize::try_from(self.page_size()).unwrap_or(isize::MAX);
                self.scroll_table(-page);
            }
            KeyAction::PageDown => {
                let page = isize::try_from(self.page_size()).unwrap_or(isize::MAX);
                self.scroll_table(page);
            }
        }
        false
    }

    fn handle_char(&mut self, ch: char) -> bool {
        match self.focus {
            InputField::Filter => {
                let filter = push_filter_char(&self.store.state().filter, ch);
                self.change_filter(&filter);
            }
            InputField::Multiplier => match ch {
                '+' => return self.handle_action(KeyAction::IncrementMultiplier),
                '-' => return self.handle_action(KeyAction::DecrementMultiplier),
                _ => {
                    let value = {
                        let mut table = self.table.borrow_mut();
                        let input = table.multiplier_input_mut();
                        if !input.push(ch) {
                            return false;
                        }
                        input.value()
                    };
                    self.change_multiplier(value);
                }
            },
        }
        false
    }

    fn handle_backspace(&mut self) -> bool {
        match self.focus {
            InputField::Filter => {
                let filter = pop_filter_char(&self.store.state().filter);
                self.change_filter(&filter);
            }
            InputField::Multiplier => {
                let value = {
                    let mut table = self.table.borrow_mut();
                    let input = table.multiplier_input_mut();
                    if !input.backspace() {
                        return false;
                    }
                    input.value()
                };
                self.change_multiplier(value);
            }
        }
        false
    }

    fn change_filter(&mut self, filter: &str) {
        self.store.dispatch(Transition::FilterChanged {
            filter,
            entities: &self.entities,
        });
    }

    /// Dispatch a typed multiplier. Text that is not a positive number yet
    /// (`""`, `"0"`) only edits the buffer.
    fn change_multiplier(&mut self, value: Option<f64>) {
        if let Some(multiplier) = value {
            self.store
                .dispatch(Transition::MultiplierChanged { multiplier });
        }
    }

    fn step_multiplier(&mut self, delta: f64) {
        let multiplier = step_multiplier(self.store.state().multiplier, delta);
        self.store
            .dispatch(Transition::MultiplierChanged { multiplier });
        self.table
            .borrow_mut()
            .multiplier_input_mut()
            .sync(multiplier);
    }

    /// Data rows visible in the current terminal, at least one.
    fn page_size(&self) -> usize {
        let body = self
            .terminal
            .size()
            .map(|size| table_body_height(Rect::new(0, 0, size.width, size.height)))
            .unwrap_or(1);
        usize::from(body.max(1))
    }

    fn scroll_table(&mut self, delta: isize) {
        let visible = self.page_size();
        self.table.borrow_mut().scroll_by(delta, visible);
    }

    /// Render the current state.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let table = self.table.borrow();
        let screen = Screen {
            table: &table,
            state: self.store.state(),
            focus: self.focus,
            load: &self.load,
            spinner_frame: self.spinner_frame,
            styles: &self.styles,
        };
        self.terminal
            .draw(|frame| render_layout(frame, &screen))?;
        Ok(())
    }

    /// Current store state.
    pub fn state(&self) -> &UiState {
        self.store.state()
    }

    /// Rendered rows, in display order.
    pub fn rows(&self) -> Vec<TableRow> {
        self.table.borrow().rows().to_vec()
    }

    /// Text of the multiplier field.
    pub fn multiplier_text(&self) -> String {
        self.table.borrow().multiplier_input().as_str().to_string()
    }

    /// Focused input field.
    pub fn focus(&self) -> InputField {
        self.focus
    }

    /// Progress of the initial fetch.
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// Backend, for inspecting the rendered buffer in tests.
    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }
}

/// Fetch in the background and run the TUI until the user quits.
///
/// This is the main entry point for the TUI. It handles terminal setup, runs
/// the event loop, and restores the terminal on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(config: &ResolvedConfig) -> Result<(), TuiError> {
    let source = HttpPageSource::new(&config.fetch_config())?;
    let fetch = spawn_fetch(source, config.resource_url.clone())?;
    info!(url = %config.resource_url, "Fetch started");

    let styles = TableStyles::with_color_config(ColorConfig::from_env_and_setting(config.color));
    let mut app = TuiApp::new(fetch, styles)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();
    app.shutdown();

    // Always restore terminal state
    restore_terminal()?;

    result
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
#[path = "app_tests.rs"]
mod tests;
