use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use tracing::{debug, info};

#[cfg(any(test, feature = "test-mocks"))]
use mockall::automock;

use crate::config::GlobalConfig;
use crate::model::{ColumnStore, TaskStatus};

use super::board::{Board, BoardAction};
use super::form::{FormOutcome, TaskForm};
use super::theme::Palette;

/// Source of terminal events (injectable for testing)
#[cfg_attr(any(test, feature = "test-mocks"), automock)]
pub trait EventSource {
    /// Block until the next event arrives
    fn next_event(&mut self) -> Result<Event>;
}

/// Real implementation reading from crossterm
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self) -> Result<Event> {
        Ok(event::read()?)
    }
}

/// The view currently receiving input. The board is parked while the form is open.
#[derive(Debug, Clone)]
pub enum ActiveView {
    Board,
    Form(TaskForm),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Quit,
}

pub struct App {
    board: Board,
    active: ActiveView,
    palette: Palette,
    last_size: Option<(u16, u16)>,
}

impl App {
    pub fn new(config: &GlobalConfig) -> Self {
        let store = if config.board.seed_sample_tasks {
            ColumnStore::sample()
        } else {
            ColumnStore::new()
        };
        Self::with_store(store, Palette::from_theme(&config.theme))
    }

    pub fn with_store(store: ColumnStore, palette: Palette) -> Self {
        Self {
            board: Board::new(store),
            active: ActiveView::Board,
            palette,
            last_size: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActiveView {
        &self.active
    }

    /// The open form, if any
    pub fn form(&self) -> Option<&TaskForm> {
        match &self.active {
            ActiveView::Form(form) => Some(form),
            ActiveView::Board => None,
        }
    }

    pub fn last_size(&self) -> Option<(u16, u16)> {
        self.last_size
    }

    pub fn handle_event(&mut self, event: Event) -> ControlFlow {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Resize(width, height) => {
                self.resize(width, height);
                ControlFlow::Continue
            }
            _ => ControlFlow::Continue,
        }
    }

    /// Terminal size changed. The board only derives geometry from it, so it
    /// is updated even while parked behind the form.
    pub fn resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "resize");
        self.last_size = Some((width, height));
        self.board.resize(width, height);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ControlFlow {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return ControlFlow::Quit;
        }

        match &mut self.active {
            ActiveView::Board => match self.board.handle_key(key) {
                BoardAction::None => ControlFlow::Continue,
                BoardAction::OpenForm(status) => {
                    self.open_form(status);
                    ControlFlow::Continue
                }
                BoardAction::Quit => ControlFlow::Quit,
            },
            ActiveView::Form(form) => match form.handle_key(key) {
                FormOutcome::Continue => ControlFlow::Continue,
                FormOutcome::Submitted(task) => {
                    self.active = ActiveView::Board;
                    self.board.accept_new_task(task);
                    ControlFlow::Continue
                }
                FormOutcome::Cancelled => {
                    self.active = ActiveView::Board;
                    ControlFlow::Continue
                }
                FormOutcome::Quit => ControlFlow::Quit,
            },
        }
    }

    fn open_form(&mut self, status: TaskStatus) {
        debug!(column = %status, "opening task form");
        self.active = ActiveView::Form(TaskForm::new(status));
    }

    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        match &self.active {
            ActiveView::Board => self.board.render(frame, area, &self.palette),
            ActiveView::Form(form) => form.render(frame, area, &self.palette),
        }
    }

    /// Draw, wait for one event, dispatch it; repeat until quit.
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut dyn EventSource,
    ) -> Result<()> {
        let size = terminal
            .size()
            .map_err(|e| anyhow!("failed to read terminal size: {e}"))?;
        self.resize(size.width, size.height);

        loop {
            terminal
                .draw(|frame| self.draw(frame))
                .map_err(|e| anyhow!("failed to draw frame: {e}"))?;

            let event = events.next_event()?;
            if self.handle_event(event) == ControlFlow::Quit {
                info!(tasks = self.board.store().total(), "quit requested");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
