//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm. The
//! core never sees a key code or a cell width — it receives actions and
//! a pixel width for the viewport classifier.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after an event arrived.
//! Idle it sleeps in `poll` for up to 250ms per wakeup; pending events
//! are drained before the next draw so a paste or a resize storm costs
//! one frame.

mod component;
mod components;
mod event;
pub mod ui;

use log::{info, warn};
use std::io::stdout;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{update, Action, Effect};
use crate::core::catalog::{self, Catalog};
use crate::core::config::{self, ResolvedConfig};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{GameGridState, SearchBar, SearchEvent};
use crate::tui::event::{poll_event_immediate, poll_event_timeout, TuiEvent};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Text editing in the search bar. Esc switches to Browse.
    Search,
    /// Navigate the grid with arrow keys. Typing auto-switches to Search.
    Browse,
}

/// TUI-specific presentation state (not part of core browsing logic)
pub struct TuiState {
    pub search: SearchBar,
    pub grid: GameGridState,
    pub input_mode: InputMode,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search: SearchBar::new(),
            grid: GameGridState::new(),
            input_mode: InputMode::Search, // User expects to type immediately
        }
    }
}

/// The breakpoint is defined in pixels, crossterm reports cells. A text
/// cell is treated as 8 px wide, so the desktop presentation starts at
/// 128 columns.
const CELL_WIDTH_PX: u16 = 8;

fn columns_to_px(columns: u16) -> u16 {
    columns.saturating_mul(CELL_WIDTH_PX)
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

pub fn run(catalog: Catalog, config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(catalog, &config);
    let mut tui = TuiState::new();
    let catalog_file = config.catalog_file.clone();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Classify the real viewport before the first frame.
    if let Ok(size) = terminal.size() {
        update(&mut app, Action::ViewportResized(columns_to_px(size.width)));
    }

    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync SearchBar focus with the input mode.
        tui.search.focused =
            tui.input_mode == InputMode::Search && !app.selection.is_open();

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));

        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // ForceQuit (Ctrl+C) always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Resize re-runs the viewport classifier, nothing else.
            if let TuiEvent::Resize(columns) = event {
                update(&mut app, Action::ViewportResized(columns_to_px(columns)));
                continue;
            }

            // Theme toggle and catalog reload work in every mode.
            if matches!(event, TuiEvent::ToggleTheme) {
                if update(&mut app, Action::ToggleTheme) == Effect::PersistTheme {
                    if let Err(e) = config::save_theme(app.theme) {
                        warn!("Failed to persist theme: {e}");
                    }
                }
                continue;
            }
            if matches!(event, TuiEvent::ReloadCatalog) {
                reload_catalog(&mut app, catalog_file.as_deref());
                tui.grid.clamp_selection(app.result_count());
                continue;
            }

            // Tab cycles the rail in every mode.
            if matches!(event, TuiEvent::NextRail) {
                let next_rail = app.rail.next();
                update(&mut app, Action::RailChanged(next_rail));
                continue;
            }

            // Mouse scroll always goes to the grid.
            if matches!(event, TuiEvent::ScrollUp | TuiEvent::ScrollDown) {
                tui.grid.handle_event(&event);
                continue;
            }

            // While the detail view is open it swallows the rest.
            if app.selection.is_open() {
                if matches!(event, TuiEvent::Escape | TuiEvent::Submit) {
                    update(&mut app, Action::CloseItem);
                }
                continue;
            }

            // Modal event dispatch
            match tui.input_mode {
                InputMode::Search => match event {
                    // Esc, Enter, or an arrow hands focus to the grid,
                    // highlighting the first result.
                    TuiEvent::Escape
                    | TuiEvent::Submit
                    | TuiEvent::CursorUp
                    | TuiEvent::CursorDown => {
                        enter_browse(&mut tui, app.result_count());
                    }
                    _ => {
                        if let Some(SearchEvent::QueryChanged(query)) =
                            tui.search.handle_event(&event)
                        {
                            update(&mut app, Action::QueryChanged(query));
                            tui.grid.clamp_selection(app.result_count());
                        }
                    }
                },
                InputMode::Browse => match event {
                    // Typing auto-switches to Search mode and forwards the event
                    TuiEvent::InputChar(_) | TuiEvent::Paste(_) | TuiEvent::Backspace => {
                        tui.input_mode = InputMode::Search;
                        tui.grid.selected = None;
                        if let Some(SearchEvent::QueryChanged(query)) =
                            tui.search.handle_event(&event)
                        {
                            update(&mut app, Action::QueryChanged(query));
                        }
                    }
                    TuiEvent::CursorUp => tui.grid.select_prev(app.result_count()),
                    TuiEvent::CursorDown => tui.grid.select_next(app.result_count()),
                    TuiEvent::CursorLeft => {
                        let prev_category = app.category.prev();
                        update(&mut app, Action::CategoryChanged(prev_category));
                        tui.grid.clamp_selection(app.result_count());
                    }
                    TuiEvent::CursorRight => {
                        let next_category = app.category.next();
                        update(&mut app, Action::CategoryChanged(next_category));
                        tui.grid.clamp_selection(app.result_count());
                    }
                    TuiEvent::Submit => {
                        let opened = tui
                            .grid
                            .selected
                            .and_then(|idx| app.filtered().get(idx).map(|g| g.id.clone()));
                        if let Some(id) = opened {
                            update(&mut app, Action::OpenItem(id));
                        }
                    }
                    // Esc in Browse mode is a no-op
                    _ => {}
                },
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

fn enter_browse(tui: &mut TuiState, result_count: usize) {
    tui.input_mode = InputMode::Browse;
    if tui.grid.selected.is_none() && result_count > 0 {
        tui.grid.selected = Some(0);
    }
}

/// Reload the configured catalog file. A failure keeps the previous
/// catalog and reports in the status line; the built-in catalog cannot
/// fail.
fn reload_catalog(app: &mut App, path: Option<&std::path::Path>) {
    match catalog::load_catalog(path) {
        Ok(catalog) => {
            update(app, Action::ReplaceCatalog(catalog));
        }
        Err(e) => {
            warn!("Catalog reload failed: {e}");
            app.status_message = format!("Reload failed: {e}");
        }
    }
}
