mod app;
pub mod board;
pub mod form;
pub mod input;
mod terminal;
pub mod theme;

use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::config::GlobalConfig;

#[cfg(any(test, feature = "test-mocks"))]
pub use app::MockEventSource;
pub use app::{ActiveView, App, ControlFlow, CrosstermEvents, EventSource};
pub use terminal::Tui;

/// Take over the terminal and run the board until the user quits
pub fn run(config: &GlobalConfig) -> Result<()> {
    let mut tui = Tui::enter()?;
    let mut app = App::new(config);
    app.run(&mut tui.terminal, &mut CrosstermEvents)
}

/// Helper function to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
