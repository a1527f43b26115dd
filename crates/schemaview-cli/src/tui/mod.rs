//! Terminal schema browser.
//!
//! Provides an interactive terminal UI with:
//! - The schema outline as a tree table (name + type columns)
//! - A details pane echoing the raw fields of the selected schema
//! - Vim-style navigation and a toggleable Type column

mod app;
mod components;
mod event;
mod ui;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::stdout;

use app::App;
use schemaview_core::{Outline, ViewConfig};

/// Run the TUI application.
pub async fn run(config: &ViewConfig, outline: Outline, title: String) -> color_eyre::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(outline, config, title);

    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
