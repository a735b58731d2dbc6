//! TUI application loop
//!
//! Drives the reducer in `state.rs` from three input sources: key events,
//! the tick timer, and fetch completions arriving over the background
//! channel. All state mutation happens here, on the UI thread.

use crate::fetch::Fetcher;
use crate::state::{AppState, Event};
use crate::tui::search::SearchState;
use crate::tui::table::TableState;
use crate::tui::ui;
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::{Duration, Instant};

pub struct App {
    pub state: AppState,
    pub search: SearchState,
    pub table: TableState,

    fetcher: Fetcher,
    tick_rate: Duration,

    // Fetch completions from background threads
    bg_sender: Sender<Event>,
    bg_receiver: Receiver<Event>,

    pub should_quit: bool,
}

impl App {
    pub fn new(fetcher: Fetcher, tick_rate: Duration) -> Self {
        let (tx, rx) = channel();

        let mut app = Self {
            state: AppState::new(),
            search: SearchState::default(),
            table: TableState::default(),
            fetcher,
            tick_rate,
            bg_sender: tx,
            bg_receiver: rx,
            should_quit: false,
        };

        app.dispatch(Event::MountRequested);
        app
    }

    pub fn run(
        &mut self,
        terminal: &mut Terminal<impl Backend<Error = std::io::Error>>,
    ) -> crate::Result<()> {
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            let timeout = self.tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(TermEvent::Key(key)) = event::read() {
                    self.handle_key(key);
                }
            }

            if last_tick.elapsed() >= self.tick_rate {
                self.process_messages();
                last_tick = Instant::now();
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Feed one event through the reducer; start a fetch when it asks for
    /// one and re-clamp the table against the new visible list.
    fn dispatch(&mut self, event: Event) {
        if let Some(seq) = self.state.apply(event) {
            self.fetcher.spawn_cycle(seq, self.bg_sender.clone());
        }
        self.table.clamp(self.state.visible.len());
    }

    /// Drain fetch completions; the reducer's sequence check drops stale ones.
    fn process_messages(&mut self) {
        while let Ok(event) = self.bg_receiver.try_recv() {
            self.dispatch(event);
        }
    }

    fn query_changed(&mut self) {
        let query = self.search.query.clone();
        self.dispatch(Event::QueryChanged(query));
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keys
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                if self.search.focused && self.search.clear() {
                    self.query_changed();
                } else if self.search.focused {
                    self.search.focused = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            KeyCode::F(5) => {
                self.dispatch(Event::RefreshClicked);
                return;
            }
            _ => {}
        }

        if self.search.focused {
            self.handle_search_key(key);
        } else {
            self.handle_table_key(key);
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => {
                self.search.insert(c);
                self.query_changed();
            }
            KeyCode::Backspace => {
                if self.search.backspace() {
                    self.query_changed();
                }
            }
            KeyCode::Delete => {
                if self.search.delete() {
                    self.query_changed();
                }
            }
            KeyCode::Left => self.search.move_left(),
            KeyCode::Right => self.search.move_right(),
            KeyCode::Home => self.search.move_home(),
            KeyCode::End => self.search.move_end(),
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => {
                self.search.focused = false;
            }
            _ => {}
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) {
        let total = self.state.visible.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.table.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.table.select_next(total),
            KeyCode::PageUp => self.table.page_up(),
            KeyCode::PageDown => self.table.page_down(total),
            KeyCode::Home => self.table.select_first(),
            KeyCode::End => self.table.select_last(total),

            KeyCode::Tab | KeyCode::Char('/') => {
                self.search.focused = true;
            }

            // Any other printable char focuses search and types it
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.focused = true;
                self.search.move_end();
                self.search.insert(c);
                self.query_changed();
            }

            _ => {}
        }
    }
}
