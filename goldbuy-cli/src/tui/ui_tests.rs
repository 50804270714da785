use crate::tui::app::App;
use crate::tui::ui::ui;
use goldbuy::prelude::{CalculatorConfig, Field};
use ratatui::{backend::TestBackend, Terminal};
use std::time::Duration;

fn app() -> App {
    App::new(CalculatorConfig::default()).unwrap()
}

/// Renders `app` and returns the screen as one string per row.
fn render(app: &App) -> Vec<String> {
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .filter_map(|x| buffer.cell((x, y)).map(|c| c.symbol().to_string()))
                .collect()
        })
        .collect()
}

fn contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}

#[test]
fn test_ui_render_header() {
    let rows = render(&app());
    assert!(rows[0].contains("GOLD"), "Header should contain branding");
}

#[test]
fn test_ui_render_menu_marks_unavailable_modes() {
    let rows = render(&app());
    assert!(contains(&rows, "Select a desk"));
    assert!(contains(&rows, "(coming soon)"));
    assert!(contains(&rows, "MENU"));
}

#[test]
fn test_ui_render_calculator_result() {
    let mut app = app();
    app.select_menu();
    app.calc.set_field(Field::Price, "2000");
    app.calc.set_field(Field::Weight, "1");

    let rows = render(&app);
    assert!(contains(&rows, "Gold price"));
    assert!(contains(&rows, "124.64"));
    assert!(contains(&rows, "96.5%"));
    assert!(contains(&rows, "15.2 g"));
}

#[test]
fn test_ui_render_error_state() {
    let mut app = app();
    app.select_menu();
    app.calc.set_field(Field::Price, "-100");

    let rows = render(&app);
    assert!(contains(&rows, "Error"));
    assert!(contains(&rows, "Values must not be negative"));
}

#[test]
fn test_ui_render_placeholder() {
    let mut app = app();
    app.menu_down();
    app.select_menu();

    let rows = render(&app);
    assert!(contains(&rows, "Coming soon"));
    assert!(contains(&rows, "COMING SOON"));
}

#[test]
fn test_ui_render_focused_field_after_delay() {
    let mut app = app();
    app.select_menu();
    app.tick(Duration::from_millis(100));

    let rows = render(&app);
    assert!(contains(&rows, "Done editing"));
}
