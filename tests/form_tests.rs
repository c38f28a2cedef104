use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kanban::tui::form::{build_help_text, FormOutcome, FormStage, TaskForm, EMPTY_TITLE_ERROR};
use kanban::tui::input::CURSOR;
use kanban::tui::theme::Palette;
use kanban::{Task, TaskStatus};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn press(form: &mut TaskForm, code: KeyCode) -> FormOutcome {
    form.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(form: &mut TaskForm, text: &str) {
    for c in text.chars() {
        assert_eq!(press(form, KeyCode::Char(c)), FormOutcome::Continue);
    }
}

fn render(form: &TaskForm) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal
        .draw(|frame| form.render(frame, frame.area(), &Palette::default()))
        .unwrap();
    terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect()
}

#[test]
fn test_new_form_starts_on_title() {
    let form = TaskForm::new(TaskStatus::InProgress);

    assert_eq!(form.status(), TaskStatus::InProgress);
    assert_eq!(form.stage(), FormStage::EditingTitle);
    assert!(form.title().is_focused());
    assert!(!form.description().is_focused());
    assert!(form.error().is_none());
}

#[test]
fn test_full_flow_submits_task() {
    let mut form = TaskForm::new(TaskStatus::ToDo);

    type_text(&mut form, "Pay rent");
    assert_eq!(press(&mut form, KeyCode::Enter), FormOutcome::Continue);
    assert_eq!(form.stage(), FormStage::EditingDescription);
    assert!(!form.title().is_focused());
    assert!(form.description().is_focused());

    type_text(&mut form, "due the 1st");
    let outcome = press(&mut form, KeyCode::Enter);

    assert_eq!(
        outcome,
        FormOutcome::Submitted(Task::new(TaskStatus::ToDo, "Pay rent", "due the 1st"))
    );
    assert_eq!(form.stage(), FormStage::Submitted);
}

#[test]
fn test_task_uses_status_captured_at_open() {
    let mut form = TaskForm::new(TaskStatus::Done);
    type_text(&mut form, "Ship");
    press(&mut form, KeyCode::Enter);

    match press(&mut form, KeyCode::Enter) {
        FormOutcome::Submitted(task) => {
            assert_eq!(task.status, TaskStatus::Done);
            assert_eq!(task.description, "");
        }
        other => panic!("expected submission, got {:?}", other),
    }
}

#[test]
fn test_empty_title_is_rejected() {
    let mut form = TaskForm::new(TaskStatus::ToDo);

    assert_eq!(press(&mut form, KeyCode::Enter), FormOutcome::Continue);
    assert_eq!(form.stage(), FormStage::EditingTitle);
    assert_eq!(form.error(), Some(EMPTY_TITLE_ERROR));
    assert!(form.title().is_focused());
}

#[test]
fn test_whitespace_title_is_rejected() {
    let mut form = TaskForm::new(TaskStatus::ToDo);
    type_text(&mut form, "   ");

    press(&mut form, KeyCode::Enter);

    assert_eq!(form.stage(), FormStage::EditingTitle);
    assert_eq!(form.error(), Some(EMPTY_TITLE_ERROR));
}

#[test]
fn test_typing_clears_title_error() {
    let mut form = TaskForm::new(TaskStatus::ToDo);
    press(&mut form, KeyCode::Enter);
    assert!(form.error().is_some());

    type_text(&mut form, "x");

    assert!(form.error().is_none());
}

#[test]
fn test_title_is_trimmed() {
    let mut form = TaskForm::new(TaskStatus::ToDo);
    type_text(&mut form, "  Pay rent ");
    press(&mut form, KeyCode::Enter);

    match press(&mut form, KeyCode::Enter) {
        FormOutcome::Submitted(task) => assert_eq!(task.title, "Pay rent"),
        other => panic!("expected submission, got {:?}", other),
    }
}

#[test]
fn test_editing_keys_go_to_focused_field() {
    let mut form = TaskForm::new(TaskStatus::ToDo);
    type_text(&mut form, "abd");
    press(&mut form, KeyCode::Left);
    type_text(&mut form, "c");
    press(&mut form, KeyCode::End);
    press(&mut form, KeyCode::Backspace);
    assert_eq!(form.title().value(), "abc");

    press(&mut form, KeyCode::Enter);
    type_text(&mut form, "xy");
    press(&mut form, KeyCode::Home);
    press(&mut form, KeyCode::Delete);

    assert_eq!(form.title().value(), "abc");
    assert_eq!(form.description().value(), "y");
}

#[test]
fn test_backslash_enter_inserts_newline() {
    let mut form = TaskForm::new(TaskStatus::ToDo);
    type_text(&mut form, "t");
    press(&mut form, KeyCode::Enter);
    type_text(&mut form, "one\\");

    assert_eq!(press(&mut form, KeyCode::Enter), FormOutcome::Continue);
    type_text(&mut form, "two");

    match press(&mut form, KeyCode::Enter) {
        FormOutcome::Submitted(task) => assert_eq!(task.description, "one\ntwo"),
        other => panic!("expected submission, got {:?}", other),
    }
}

#[test]
fn test_escape_cancels_at_any_stage() {
    let mut form = TaskForm::new(TaskStatus::ToDo);
    assert_eq!(press(&mut form, KeyCode::Esc), FormOutcome::Cancelled);

    let mut form = TaskForm::new(TaskStatus::ToDo);
    type_text(&mut form, "t");
    press(&mut form, KeyCode::Enter);
    assert_eq!(press(&mut form, KeyCode::Esc), FormOutcome::Cancelled);
}

#[test]
fn test_quit_keys() {
    let mut form = TaskForm::new(TaskStatus::ToDo);
    assert_eq!(press(&mut form, KeyCode::Char('q')), FormOutcome::Quit);

    let mut form = TaskForm::new(TaskStatus::ToDo);
    type_text(&mut form, "t");
    press(&mut form, KeyCode::Enter);
    assert_eq!(
        form.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        FormOutcome::Quit
    );
}

#[test]
fn test_submitted_form_ignores_input() {
    let mut form = TaskForm::new(TaskStatus::ToDo);
    type_text(&mut form, "t");
    press(&mut form, KeyCode::Enter);
    press(&mut form, KeyCode::Enter);

    assert_eq!(press(&mut form, KeyCode::Enter), FormOutcome::Continue);
    assert_eq!(press(&mut form, KeyCode::Char('x')), FormOutcome::Continue);
    assert_eq!(form.description().value(), "");
}

#[test]
fn test_render_title_stage() {
    let mut form = TaskForm::new(TaskStatus::InProgress);
    type_text(&mut form, "Pay");

    let content = render(&form);

    assert!(content.contains("New Task · In Progress"));
    assert!(content.contains(&format!("Title: Pay{}", CURSOR)));
    assert!(content.contains("[Enter] next"));
}

#[test]
fn test_render_description_stage_and_error() {
    let mut form = TaskForm::new(TaskStatus::ToDo);
    press(&mut form, KeyCode::Enter);
    assert!(render(&form).contains(EMPTY_TITLE_ERROR));

    type_text(&mut form, "Pay");
    press(&mut form, KeyCode::Enter);
    let content = render(&form);

    assert!(content.contains("Title: Pay"));
    assert!(content.contains(&format!("Description: {}", CURSOR)));
    assert!(content.contains("[Enter] save"));
}

#[test]
fn test_help_text_per_stage() {
    assert!(build_help_text(FormStage::EditingTitle).contains("[Esc] cancel"));
    assert!(build_help_text(FormStage::EditingDescription).contains("newline"));
    assert!(build_help_text(FormStage::Submitted).is_empty());
}
