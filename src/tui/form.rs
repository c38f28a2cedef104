use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use tracing::debug;

use crate::model::{Task, TaskStatus};

use super::centered_rect;
use super::input::TextField;
use super::theme::Palette;

/// Shown when Enter is pressed on a blank title
pub const EMPTY_TITLE_ERROR: &str = "Title cannot be empty";

/// Which field the form is collecting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStage {
    EditingTitle,
    EditingDescription,
    /// The task has been handed back; further input is ignored
    Submitted,
}

/// Result of feeding one key to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// Keep the form open
    Continue,
    Submitted(Task),
    Cancelled,
    Quit,
}

/// Modal two-step form that builds a new task for one column
#[derive(Debug, Clone)]
pub struct TaskForm {
    status: TaskStatus,
    stage: FormStage,
    title: TextField,
    description: TextField,
    error: Option<&'static str>,
}

impl TaskForm {
    pub fn new(status: TaskStatus) -> Self {
        let mut title = TextField::new();
        title.set_focused(true);
        Self {
            status,
            stage: FormStage::EditingTitle,
            title,
            description: TextField::new(),
            error: None,
        }
    }

    /// Column the new task will be created in
    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn stage(&self) -> FormStage {
        self.stage
    }

    pub fn title(&self) -> &TextField {
        &self.title
    }

    pub fn description(&self) -> &TextField {
        &self.description
    }

    pub fn error(&self) -> Option<&str> {
        self.error
    }

    fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.stage {
            FormStage::EditingTitle => Some(&mut self.title),
            FormStage::EditingDescription => Some(&mut self.description),
            FormStage::Submitted => None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormOutcome {
        if self.stage == FormStage::Submitted {
            return FormOutcome::Continue;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => FormOutcome::Quit,
            KeyCode::Char('q') => FormOutcome::Quit,
            KeyCode::Esc => {
                debug!(column = %self.status, "task form cancelled");
                FormOutcome::Cancelled
            }
            KeyCode::Enter => self.confirm(),
            _ => {
                if let Some(field) = self.focused_field_mut() {
                    field.handle_key(key);
                }
                if self.stage == FormStage::EditingTitle && !self.title.value().trim().is_empty() {
                    self.error = None;
                }
                FormOutcome::Continue
            }
        }
    }

    fn confirm(&mut self) -> FormOutcome {
        match self.stage {
            FormStage::EditingTitle => {
                if self.title.value().trim().is_empty() {
                    debug!("rejected empty task title");
                    self.error = Some(EMPTY_TITLE_ERROR);
                    return FormOutcome::Continue;
                }
                self.error = None;
                self.title.set_focused(false);
                self.description.set_focused(true);
                self.stage = FormStage::EditingDescription;
                FormOutcome::Continue
            }
            FormStage::EditingDescription => {
                // Backslash before Enter continues the description on a new line
                if self.description.pop_if('\\') {
                    self.description.insert_char('\n');
                    return FormOutcome::Continue;
                }
                self.description.set_focused(false);
                self.stage = FormStage::Submitted;
                FormOutcome::Submitted(Task::new(
                    self.status,
                    self.title.value().trim(),
                    self.description.value(),
                ))
            }
            FormStage::Submitted => FormOutcome::Continue,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let popup = centered_rect(60, 50, area);
        frame.render_widget(Clear, popup);

        let label = Style::default().fg(palette.normal).bold();
        let text = Style::default().fg(palette.text);

        let mut lines = self.title.to_lines("Title: ", label, text);
        lines.push(Line::raw(""));
        lines.extend(self.description.to_lines("Description: ", label, text));
        lines.push(Line::raw(""));
        if let Some(error) = self.error {
            lines.push(Line::styled(error, Style::default().fg(Color::Red)));
        }
        lines.push(Line::styled(
            build_help_text(self.stage),
            Style::default().fg(palette.dimmed),
        ));

        let form = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .title(format!(" New Task · {} ", self.status.as_str()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.popup_border)),
        );
        frame.render_widget(form, popup);
    }
}

/// Key help for the current stage
pub fn build_help_text(stage: FormStage) -> &'static str {
    match stage {
        FormStage::EditingTitle => "[Enter] next  [Esc] cancel  [q] quit",
        FormStage::EditingDescription => "[Enter] save  [\\+Enter] newline  [Esc] cancel  [q] quit",
        FormStage::Submitted => "",
    }
}
