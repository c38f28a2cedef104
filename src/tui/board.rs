use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Padding, Paragraph};
use tracing::{debug, info};

use crate::model::{ColumnStore, Task, TaskStatus};

use super::theme::Palette;

/// Rows taken by the footer help bar
pub const FOOTER_HEIGHT: u16 = 3;
/// Borders plus horizontal padding around every column's list
pub const COLUMN_CHROME: u16 = 4;
/// Room taken by the selection marker, drawn only in the focused column
pub const FOCUS_CHROME: u16 = 2;

const HIGHLIGHT_SYMBOL: &str = "> ";

/// Column geometry derived from the last known terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub width: u16,
    pub height: u16,
    pub column_width: u16,
    pub list_height: u16,
}

impl BoardLayout {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            column_width: width / TaskStatus::columns().len() as u16,
            list_height: height.saturating_sub(FOOTER_HEIGHT),
        }
    }

    /// Text columns available to a task line
    pub fn content_width(&self, focused: bool) -> usize {
        let chrome = if focused { COLUMN_CHROME + FOCUS_CHROME } else { COLUMN_CHROME };
        self.column_width.saturating_sub(chrome) as usize
    }
}

/// What the board asks the app to do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    None,
    /// Open the task form targeting this column
    OpenForm(TaskStatus),
    Quit,
}

/// Main kanban view: three columns, one of them focused
#[derive(Debug, Clone)]
pub struct Board {
    store: ColumnStore,
    focused: TaskStatus,
    layout: Option<BoardLayout>,
    selections: [ListState; 3],
}

impl Board {
    pub fn new(store: ColumnStore) -> Self {
        let mut board = Self {
            store,
            focused: TaskStatus::ToDo,
            layout: None,
            selections: Default::default(),
        };
        for &status in TaskStatus::columns() {
            board.clamp_selection(status);
        }
        board
    }

    pub fn store(&self) -> &ColumnStore {
        &self.store
    }

    pub fn focused(&self) -> TaskStatus {
        self.focused
    }

    pub fn layout(&self) -> Option<BoardLayout> {
        self.layout
    }

    /// False until the first size event arrives
    pub fn is_ready(&self) -> bool {
        self.layout.is_some()
    }

    /// Record the terminal size. The first call moves the board out of loading.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.layout.is_none() {
            info!(width, height, "board ready");
        }
        self.layout = Some(BoardLayout::new(width, height));
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_previous(&mut self) {
        self.focused = self.focused.previous();
    }

    /// Selected row in a column, `None` when the column is empty
    pub fn selection(&self, status: TaskStatus) -> Option<usize> {
        self.selections[status.index()].selected()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection(self.focused)
    }

    /// Get the currently selected task in the focused column
    pub fn selected_task(&self) -> Option<&Task> {
        self.selected_index()
            .and_then(|index| self.store.get(self.focused, index))
    }

    /// Select a row in the focused column, clamped to the last task
    pub fn select(&mut self, index: usize) {
        let len = self.store.len(self.focused);
        if len > 0 {
            self.selections[self.focused.index()].select(Some(index.min(len - 1)));
        }
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        if let Some(index) = self.selected_index() {
            self.select(index + 1);
        }
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        if let Some(index) = self.selected_index() {
            self.select(index.saturating_sub(1));
        }
    }

    pub fn move_selected_task_forward(&mut self) {
        self.move_selected_task(ColumnStore::move_forward);
    }

    pub fn move_selected_task_backward(&mut self) {
        self.move_selected_task(ColumnStore::move_backward);
    }

    fn move_selected_task(
        &mut self,
        relocate: fn(&mut ColumnStore, TaskStatus, usize) -> Option<TaskStatus>,
    ) {
        let from = self.focused;
        let Some(index) = self.selected_index() else {
            debug!(column = %from, "move ignored, column is empty");
            return;
        };
        let title = self.store.get(from, index).map(|t| t.title.clone()).unwrap_or_default();
        if let Some(to) = relocate(&mut self.store, from, index) {
            info!(task = %title, %from, %to, "moved task");
            self.clamp_selection(from);
            self.clamp_selection(to);
        }
    }

    /// Request the task form for the focused column; nothing else changes
    pub fn open_create_form(&self) -> BoardAction {
        BoardAction::OpenForm(self.focused)
    }

    /// Append a task created by the form to the end of its column
    pub fn accept_new_task(&mut self, task: Task) {
        let status = task.status;
        info!(task = %task.title, column = %status, "created task");
        self.store.push(task);
        self.clamp_selection(status);
    }

    /// Keep a column's selection on an existing row, or clear it if empty
    fn clamp_selection(&mut self, status: TaskStatus) {
        let len = self.store.len(status);
        let state = &mut self.selections[status.index()];
        match state.selected() {
            _ if len == 0 => state.select(None),
            None => state.select(Some(0)),
            Some(index) if index >= len => state.select(Some(len - 1)),
            Some(_) => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> BoardAction {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => BoardAction::Quit,
            KeyCode::Char('q') => BoardAction::Quit,
            KeyCode::Char('h') | KeyCode::Left => {
                self.focus_previous();
                BoardAction::None
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.focus_next();
                BoardAction::None
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.select_next();
                BoardAction::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.select_previous();
                BoardAction::None
            }
            KeyCode::Enter => {
                self.move_selected_task_forward();
                BoardAction::None
            }
            KeyCode::Char('r') => {
                self.move_selected_task_backward();
                BoardAction::None
            }
            KeyCode::Char('n') => self.open_create_form(),
            _ => BoardAction::None,
        }
    }

    /// Draw the board. Selection state is copied, so drawing never mutates.
    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let Some(layout) = self.layout else {
            let loading = Paragraph::new("Loading...")
                .style(Style::default().fg(palette.dimmed))
                .alignment(Alignment::Center);
            frame.render_widget(loading, area);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(chunks[0]);

        for (i, &status) in TaskStatus::columns().iter().enumerate() {
            let is_focused = status == self.focused;
            let tasks = self.store.column(status);
            let width = layout.content_width(is_focused);

            let title = format!(" {} ({}) ", status.as_str(), tasks.len());
            let block = if is_focused {
                Block::default()
                    .title(title)
                    .title_style(Style::default().fg(palette.selected).bold())
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(palette.selected))
            } else {
                Block::default()
                    .title(title)
                    .title_style(Style::default().fg(palette.normal))
                    .borders(Borders::ALL)
                    .border_type(BorderType::Plain)
                    .border_style(Style::default().fg(palette.dimmed))
            }
            .padding(Padding::horizontal(1));

            let items: Vec<ListItem> = tasks
                .iter()
                .map(|task| task_item(task, width, palette))
                .collect();

            let mut list = List::new(items).block(block);
            if is_focused {
                list = list
                    .highlight_symbol(HIGHLIGHT_SYMBOL)
                    .highlight_style(Style::default().fg(palette.selected).bold());
            }

            let mut state = self.selections[i].clone();
            frame.render_stateful_widget(list, columns[i], &mut state);
        }

        let footer = Paragraph::new(build_footer_text())
            .style(Style::default().fg(palette.dimmed))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, chunks[1]);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(ColumnStore::new())
    }
}

/// Footer help for the board view
pub fn build_footer_text() -> &'static str {
    " [h/l] column  [j/k] select  [Enter] move right  [r] move left  [n] new  [q] quit "
}

/// Two-line list entry: title, then the first description line
fn task_item(task: &Task, width: usize, palette: &Palette) -> ListItem<'static> {
    let title = Line::styled(
        truncate(&task.title, width),
        Style::default().fg(palette.text).bold(),
    );
    let first_line = task.description.lines().next().unwrap_or("");
    let description = Line::styled(
        truncate(first_line, width),
        Style::default().fg(palette.description).italic(),
    );
    ListItem::new(vec![title, description])
}

/// Truncate to `max` chars (char-safe for UTF-8), marking the cut with "..."
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}
