//! Userdex - terminal browser for a remote user directory
//!
//! Fetches a user list from an HTTP endpoint, filters it by name as you
//! type, and renders it as a table with explicit loading and error states.
//!
//! # Example
//!
//! ```no_run
//! use userdex::{filter, Fetcher};
//!
//! fn main() -> userdex::Result<()> {
//!     let fetcher = Fetcher::new(userdex::DEFAULT_ENDPOINT)?;
//!     let users = fetcher.fetch_users()?;
//!
//!     for idx in filter::filter_indices(&users, "graham") {
//!         let user = &users[idx];
//!         println!("{} <{}> {}", user.name, user.email, user.city());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod fetch;
pub mod filter;
pub mod logging;
pub mod model;
pub mod state;
pub mod tui;

// Re-export main types
pub use error::{Result, UserdexError};
pub use fetch::Fetcher;
pub use model::{Address, Company, User};
pub use state::{AppState, Event};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Endpoint used when no `--url` override is given
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Endpoint serving the user list as a JSON array
    pub endpoint: String,
    /// UI tick rate for draining fetch completions
    pub tick_rate: std::time::Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            tick_rate: std::time::Duration::from_millis(50),
        }
    }
}
