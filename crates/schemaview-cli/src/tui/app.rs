//! Application state and main event loop.

use std::io::Stdout;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::TableState;

use schemaview_core::{Outline, OutlineRow, ViewConfig};

use super::event::{Event, EventHandler};
use super::ui;

/// Rows moved by PageUp/PageDown.
const PAGE_SIZE: usize = 10;

/// Type column width used until the first resize calculation.
const INITIAL_TYPE_COLUMN_PERCENT: u16 = 40;

/// Data columns of the tree table (the name column is always shown).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Type,
}

impl Column {
    pub const ALL: &'static [Column] = &[Column::Type];

    pub fn title(self) -> &'static str {
        match self {
            Self::Type => "Type",
        }
    }
}

/// Which data columns are displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayColumns {
    /// Every column in [`Column::ALL`].
    All,
    /// Exactly these columns, in order.
    Only(Vec<Column>),
}

impl DisplayColumns {
    pub fn columns(&self) -> Vec<Column> {
        match self {
            Self::All => Column::ALL.to_vec(),
            Self::Only(columns) => columns.clone(),
        }
    }

    pub fn shows(&self, column: Column) -> bool {
        match self {
            Self::All => true,
            Self::Only(columns) => columns.contains(&column),
        }
    }
}

/// Main application state.
pub struct App {
    /// The schema outline, including expansion state
    pub outline: Outline,
    /// Position of the selection within the visible rows
    pub cursor: usize,
    /// Table scroll state
    pub table_state: TableState,
    /// Displayed data columns
    pub display_columns: DisplayColumns,
    /// Width of the Type column, percent of the tree area
    pub type_column_percent: u16,
    /// Width of the details pane, percent of the screen
    pub details_width_percent: u16,
    /// Source file shown in the title
    pub title: String,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new app instance.
    pub fn new(outline: Outline, config: &ViewConfig, title: String) -> Self {
        let display_columns = if config.show_type_column {
            DisplayColumns::All
        } else {
            DisplayColumns::Only(Vec::new())
        };

        let mut table_state = TableState::default();
        if !outline.is_empty() {
            table_state.select(Some(0));
        }

        Self {
            outline,
            cursor: 0,
            table_state,
            display_columns,
            type_column_percent: INITIAL_TYPE_COLUMN_PERCENT,
            details_width_percent: config.details_width_percent.min(90),
            title,
            should_quit: false,
        }
    }

    /// Run the main event loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> color_eyre::Result<()> {
        let mut events = EventHandler::new();

        loop {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(Event::Key(key)) => self.handle_key_event(key),
                Some(Event::Resize) => {}
                None => break,
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Outline indices currently on screen, in order.
    pub fn visible_rows(&self) -> Vec<usize> {
        self.outline.visible_rows()
    }

    /// Outline index of the selected row.
    pub fn selected_index(&self) -> Option<usize> {
        self.visible_rows().get(self.cursor).copied()
    }

    pub fn selected_row(&self) -> Option<&OutlineRow> {
        self.selected_index().and_then(|index| self.outline.row(index))
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_previous(),
            KeyCode::Char('h') | KeyCode::Left => self.collapse_or_parent(),
            KeyCode::Char('l') | KeyCode::Right => self.expand_or_child(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Char('g') | KeyCode::Home => self.select_position(0),
            KeyCode::Char('G') | KeyCode::End => {
                let last = self.visible_rows().len().saturating_sub(1);
                self.select_position(last);
            }
            KeyCode::PageDown => self.select_position(self.cursor.saturating_add(PAGE_SIZE)),
            KeyCode::PageUp => self.select_position(self.cursor.saturating_sub(PAGE_SIZE)),
            KeyCode::Char('T') => self.toggle_type_column(),
            KeyCode::Char('e') => self.expand_all(),
            KeyCode::Char('c') => self.collapse_all(),
            _ => {}
        }
    }

    /// Move the cursor, clamped to the visible rows.
    fn select_position(&mut self, position: usize) {
        let len = self.visible_rows().len();
        if len == 0 {
            self.cursor = 0;
            self.table_state.select(None);
            return;
        }
        self.cursor = position.min(len - 1);
        self.table_state.select(Some(self.cursor));
    }

    fn select_next(&mut self) {
        self.select_position(self.cursor.saturating_add(1));
    }

    fn select_previous(&mut self) {
        self.select_position(self.cursor.saturating_sub(1));
    }

    /// Select a row by outline index if it is visible.
    fn select_index(&mut self, index: usize) {
        if let Some(position) = self.visible_rows().iter().position(|&i| i == index) {
            self.select_position(position);
        }
    }

    /// Left: collapse an open row, otherwise jump to its parent.
    fn collapse_or_parent(&mut self) {
        let Some(index) = self.selected_index() else {
            return;
        };
        if self.outline.set_expanded(index, false) {
            return;
        }
        if let Some(parent) = self.outline.row(index).and_then(|row| row.parent) {
            self.select_index(parent);
        }
    }

    /// Right: expand a closed row, otherwise step into its first child.
    fn expand_or_child(&mut self) {
        let Some(index) = self.selected_index() else {
            return;
        };
        if self.outline.set_expanded(index, true) {
            return;
        }
        if let Some(&child) = self.outline.row(index).and_then(|row| row.children.first()) {
            self.select_index(child);
        }
    }

    /// Expand every row, keeping the selected row selected.
    fn expand_all(&mut self) {
        let selected = self.selected_index();
        self.outline.set_all_expanded(true);
        if let Some(index) = selected {
            self.select_index(index);
        }
    }

    /// Collapse every row and return to the top.
    fn collapse_all(&mut self) {
        self.outline.set_all_expanded(false);
        self.select_position(0);
    }

    fn toggle_selected(&mut self) {
        if let Some(index) = self.selected_index() {
            self.outline.toggle(index);
        }
    }

    /// Show or hide the Type column.
    ///
    /// The next state is derived from the displayed column list: all
    /// columns hides everything, nothing shows Type again (and gives it an
    /// even share of the width), anything else flips Type's membership.
    pub fn toggle_type_column(&mut self) {
        self.display_columns = match &self.display_columns {
            DisplayColumns::All => DisplayColumns::Only(Vec::new()),
            DisplayColumns::Only(columns) if columns.is_empty() => {
                let columns = vec![Column::Type];
                self.type_column_percent = 100 / (columns.len() as u16 + 1);
                DisplayColumns::Only(columns)
            }
            DisplayColumns::Only(columns) if columns.contains(&Column::Type) => {
                let columns = columns.iter().copied().filter(|c| *c != Column::Type);
                DisplayColumns::Only(columns.collect())
            }
            DisplayColumns::Only(columns) => {
                let mut columns = columns.clone();
                columns.push(Column::Type);
                DisplayColumns::Only(columns)
            }
        };
    }
}
