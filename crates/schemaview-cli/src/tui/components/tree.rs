//! Schema tree table component.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Cell, Row, Table},
};

use schemaview_core::{GroupKind, OutlineRow, RowKind};

use crate::tui::app::{App, Column};

/// Label style for a row: group rows get a colour per category,
/// schemas with properties are bold.
fn row_style(row: &OutlineRow) -> Style {
    match row.kind {
        RowKind::Group(GroupKind::Properties) => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
        RowKind::Group(GroupKind::AdditionalProperties) => Style::default().fg(Color::Magenta),
        RowKind::Group(GroupKind::PatternProperties) => Style::default().fg(Color::Blue),
        RowKind::Group(GroupKind::Definitions) => Style::default().fg(Color::Yellow),
        RowKind::Schema if row.emphasized => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        RowKind::Schema => Style::default().fg(Color::White),
    }
}

fn expander(row: &OutlineRow) -> &'static str {
    match (row.has_children(), row.expanded) {
        (false, _) => "  ",
        (true, true) => "▾ ",
        (true, false) => "▸ ",
    }
}

/// Render the tree table.
pub fn render(app: &mut App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", app.title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let columns = app.display_columns.columns();

    let rows: Vec<Row> = app
        .visible_rows()
        .into_iter()
        .filter_map(|index| app.outline.row(index))
        .map(|row| {
            let label = format!("{}{}{}", "  ".repeat(row.depth), expander(row), row.label);
            let mut cells = vec![Cell::from(label).style(row_style(row))];
            for column in &columns {
                match column {
                    Column::Type => cells.push(
                        Cell::from(row.value.clone()).style(Style::default().fg(Color::Cyan)),
                    ),
                }
            }
            Row::new(cells)
        })
        .collect();

    let widths: Vec<Constraint> = if columns.is_empty() {
        vec![Constraint::Percentage(100)]
    } else {
        let type_width = app.type_column_percent;
        vec![
            Constraint::Percentage(100 - type_width),
            Constraint::Percentage(type_width),
        ]
    };

    let mut header = vec![Cell::from("Name")];
    header.extend(columns.iter().map(|c| Cell::from(c.title())));

    let table = Table::new(rows, widths)
        .header(
            Row::new(header).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            ),
        )
        .block(block)
        .row_highlight_style(Style::default().bg(Color::DarkGray));

    frame.render_stateful_widget(table, area, &mut app.table_state);
}
