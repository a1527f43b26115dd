//! Details pane component.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::tui::app::App;

/// Render the raw fields of the selected schema.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines: Vec<Line> = match app.selected_row() {
        Some(row) if !row.details.is_empty() => row
            .details
            .iter()
            .map(|entry| {
                Line::from(vec![
                    Span::styled(
                        format!("{}: ", entry.key),
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(entry.value.as_str(), Style::default().fg(Color::White)),
                ])
            })
            .collect(),
        _ => vec![Line::styled("(no details)", Style::default().fg(Color::DarkGray))],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
