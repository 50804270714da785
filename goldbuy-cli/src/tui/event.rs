//! Event handling for keyboard input using crossterm.

use goldbuy::prelude::Screen;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;
use tui_input::InputRequest;

use crate::tui::app::App;

/// Poll for events for at most `timeout` and handle them.
/// Returns Ok(true) if the app should quit.
pub fn handle_events(app: &mut App, timeout: Duration) -> io::Result<bool> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
    {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }
        return Ok(handle_key(app, key));
    }

    Ok(false)
}

/// Applies one key press. Returns true if the app should quit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    // Handle Ctrl+C globally
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.calc.screen() {
        Screen::Menu => handle_menu(app, key.code),
        Screen::Calculator(_) if app.editing().is_some() => handle_input_mode(app, key.code),
        Screen::Calculator(_) => handle_calculator(app, key.code),
        Screen::Placeholder(_) => handle_placeholder(app, key.code),
    }

    !app.running
}

fn handle_menu(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.menu_up(),
        KeyCode::Down | KeyCode::Char('j') => app.menu_down(),
        KeyCode::Enter => app.select_menu(),
        KeyCode::Char('q') => app.running = false,
        _ => {}
    }
}

/// Keys while a text field has focus. Printable keys go to the field.
fn handle_input_mode(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.leave_field(),
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => app.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.prev_field(),
        KeyCode::Char(c) => app.edit(InputRequest::InsertChar(c)),
        KeyCode::Backspace => app.edit(InputRequest::DeletePrevChar),
        KeyCode::Delete => app.edit(InputRequest::DeleteNextChar),
        KeyCode::Left => app.edit(InputRequest::GoToPrevChar),
        KeyCode::Right => app.edit(InputRequest::GoToNextChar),
        KeyCode::Home => app.edit(InputRequest::GoToStart),
        KeyCode::End => app.edit(InputRequest::GoToEnd),
        _ => {}
    }
}

/// Keys on the calculator with no field focused.
fn handle_calculator(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.go_back(),
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => app.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.prev_field(),
        KeyCode::Char('g') => app.cycle_grade(),
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(n) = c.to_digit(10) {
                app.apply_preset(n as usize);
            }
        }
        _ => {}
    }
}

fn handle_placeholder(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => app.go_back(),
        KeyCode::Char('q') => app.running = false,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goldbuy::prelude::{CalculatorConfig, Field};

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> App {
        App::new(CalculatorConfig::default()).unwrap()
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut app = app();
        let quit = handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(quit);
    }

    #[test]
    fn test_menu_navigation_opens_placeholder() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.calc.screen(), Screen::Placeholder(_)));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.calc.screen(), Screen::Menu);
    }

    #[test]
    fn test_q_in_field_is_text_not_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.editing(), Some(Field::Price));

        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.calc.form().price, "q");
        assert_eq!(app.calc.result_text(), "฿0.00");
    }

    #[test]
    fn test_esc_leaves_field_then_screen() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Esc);
        assert!(app.calc.screen().is_calculator());
        assert_eq!(app.editing(), None);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.calc.screen(), Screen::Menu);
    }

    #[test]
    fn test_digit_applies_preset_without_focus() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.calc.form().weight, "15.2");

        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.calc.form().grade.to_string(), "99.99%");
    }
}
