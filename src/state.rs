//! Fetch/filter state machine
//!
//! Explicit state struct plus a pure reducer over discrete events. The
//! visible list is re-derived from (users, query) on every transition
//! instead of being patched incrementally.
//!
//! Each fetch is tagged with a sequence number. A completion whose number
//! no longer matches the in-flight one is discarded, so a refresh issued
//! while a request is outstanding supersedes it instead of racing it.

use crate::filter::filter_indices;
use crate::model::User;

/// Discrete inputs to the reducer: user actions plus fetch completions.
#[derive(Debug, Clone)]
pub enum Event {
    /// First render; kicks off the initial fetch.
    MountRequested,
    /// Manual refresh; re-runs the fetch cycle.
    RefreshClicked,
    /// Search input changed; `visible` is re-derived immediately.
    QueryChanged(String),
    /// A fetch settled successfully.
    FetchSucceeded { seq: u64, users: Vec<User> },
    /// A fetch settled with an error message.
    FetchFailed { seq: u64, message: String },
}

/// Component state; the only mutable data in the application.
#[derive(Debug, Default)]
pub struct AppState {
    /// Full record list from the last successful fetch.
    pub users: Vec<User>,
    /// Indices into `users` matching the current query, in list order.
    pub visible: Vec<usize>,
    pub query: String,
    /// Message from the most recent failed fetch, cleared when a new
    /// fetch starts.
    pub error: Option<String>,
    pub is_loading: bool,
    in_flight: Option<u64>,
    next_seq: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event. Returns the sequence number of a fetch the caller
    /// must start, if the event demands one; the reducer itself performs
    /// no I/O.
    pub fn apply(&mut self, event: Event) -> Option<u64> {
        let fetch = match event {
            Event::MountRequested | Event::RefreshClicked => {
                self.next_seq += 1;
                let seq = self.next_seq;
                self.in_flight = Some(seq);
                self.is_loading = true;
                self.error = None;
                Some(seq)
            }
            Event::QueryChanged(query) => {
                self.query = query;
                None
            }
            Event::FetchSucceeded { seq, users } => {
                if self.in_flight == Some(seq) {
                    self.users = users;
                    self.error = None;
                    self.is_loading = false;
                    self.in_flight = None;
                }
                None
            }
            Event::FetchFailed { seq, message } => {
                if self.in_flight == Some(seq) {
                    self.error = Some(message);
                    self.is_loading = false;
                    self.in_flight = None;
                }
                None
            }
        };

        self.visible = filter_indices(&self.users, &self.query);
        fetch
    }

    /// Users currently visible, in order. Convenience for render code.
    pub fn visible_users(&self) -> impl Iterator<Item = &User> {
        self.visible.iter().filter_map(|&idx| self.users.get(idx))
    }
}
