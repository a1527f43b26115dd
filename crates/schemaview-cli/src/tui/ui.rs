//! UI rendering for the TUI.

use ratatui::{prelude::*, widgets::Paragraph};

use super::app::{App, Column};
use super::components::{details, tree};

/// Render the entire UI.
pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    // Main layout: content, status
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Tree + details
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_main_content(app, frame, chunks[0]);
    render_status_bar(app, frame, chunks[1]);
}

/// Render the main content area (tree and details side by side).
fn render_main_content(app: &mut App, frame: &mut Frame, area: Rect) {
    let details_width = app.details_width_percent;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(100 - details_width), // Tree
            Constraint::Percentage(details_width),       // Details
        ])
        .split(area);

    tree::render(app, frame, chunks[0]);
    details::render(app, frame, chunks[1]);
}

/// Render the status bar.
fn render_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let type_hint = if app.display_columns.shows(Column::Type) {
        "[T] Hide type"
    } else {
        "[T] Show type"
    };

    let position = format!("{}/{}", app.cursor + 1, app.visible_rows().len());

    let status = format!(
        "[j/k] Move  [h/l] Collapse/Expand  [e/c] All  {}  [q] Quit  |  {}",
        type_hint, position
    );

    let status_bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status_bar, area);
}
