//! Interactive terminal UI

pub mod app;
pub mod search;
pub mod table;
pub mod ui;

use crate::error::Result;
use crate::fetch::Fetcher;
use crate::AppConfig;
use app::App;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;

/// Set up the terminal, run the app until quit, then restore the terminal.
pub fn run(config: &AppConfig) -> Result<()> {
    let fetcher = Fetcher::new(config.endpoint.clone())?;

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(fetcher, config.tick_rate);
    let result = app.run(&mut terminal);

    // Restore even when the loop errored
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
