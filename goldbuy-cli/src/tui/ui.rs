//! UI rendering for the TUI.
//!
//! Everything drawn here comes from the calculator's [`ViewState`]; the only
//! app-local state read is the menu cursor, the input cursor and the status
//! message.

use goldbuy::prelude::{Field, Mode, Screen, ViewState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, MessageType};
use crate::tui::components::{InlineStat, StatCard};
use crate::tui::theme::{icons, theme};

// ═══════════════════════════════════════════════════════════════════════════
// MAIN UI ENTRY POINT
// ═══════════════════════════════════════════════════════════════════════════

pub fn ui(frame: &mut Frame, app: &App) {
    let t = theme();
    let view = app.calc.view();

    frame.render_widget(Clear, frame.area());
    frame.render_widget(Block::default().style(t.bg()), frame.area());

    // Root Layout: Header | Main Content | Status Bar
    let root_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main Content
            Constraint::Length(1), // Status Bar
        ])
        .split(frame.area());

    render_header(frame, root_layout[0], &view);

    match view.screen {
        Screen::Menu => render_menu(frame, root_layout[1], app),
        Screen::Calculator(_) => render_calculator(frame, root_layout[1], app, &view),
        Screen::Placeholder(mode) => render_placeholder(frame, root_layout[1], mode),
    }

    render_status_bar(frame, root_layout[2], app, &view);
}

// ═══════════════════════════════════════════════════════════════════════════
// HEADER
// ═══════════════════════════════════════════════════════════════════════════

fn render_header(frame: &mut Frame, area: Rect, view: &ViewState) {
    let t = theme();

    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(t.border_inactive())
        .style(t.bg());

    let inner = header_block.inner(area);
    frame.render_widget(header_block, area);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(inner);

    let brand = Line::from(vec![
        Span::raw(" "),
        Span::styled(icons::GOLD, Style::default().fg(t.gold)),
        Span::raw(" "),
        Span::styled("GOLD", t.title()),
        Span::styled("BUY", t.text().add_modifier(Modifier::BOLD)),
    ]);
    frame.render_widget(Paragraph::new(brand).alignment(Alignment::Left), layout[0]);

    if let Some(title) = &view.title {
        frame.render_widget(
            Paragraph::new(Span::styled(title.as_str(), t.title())).alignment(Alignment::Right),
            layout[1],
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// MENU
// ═══════════════════════════════════════════════════════════════════════════

fn render_menu(frame: &mut Frame, area: Rect, app: &App) {
    let t = theme();

    let items: Vec<ListItem> = app
        .menu_modes()
        .iter()
        .enumerate()
        .map(|(i, mode)| {
            let style = if i == app.menu_index {
                t.highlight()
            } else {
                t.text()
            };
            let marker = if i == app.menu_index {
                icons::ARROW_RIGHT
            } else {
                " "
            };
            let mut spans = vec![
                Span::styled(format!(" {} ", marker), style),
                Span::styled(mode.title(), style),
            ];
            if !mode.is_available() {
                spans.push(Span::styled("  (coming soon)", t.subtitle()));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let block = Block::default()
        .title(" Select a desk ")
        .title_style(t.title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(t.border_active())
        .padding(Padding::uniform(1))
        .style(t.bg());

    frame.render_widget(List::new(items).block(block), centered_rect(60, 60, area));
}

// ═══════════════════════════════════════════════════════════════════════════
// CALCULATOR
// ═══════════════════════════════════════════════════════════════════════════

fn field_label(field: Field) -> (&'static str, &'static str) {
    match field {
        Field::Price => ("Gold price", "฿"),
        Field::Deduction => ("Deduction", "%"),
        Field::Weight => ("Weight", "g"),
    }
}

fn render_calculator(frame: &mut Frame, area: Rect, app: &App, view: &ViewState) {
    let t = theme();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(t.border_active())
        .padding(Padding::horizontal(1))
        .style(t.bg());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Price
            Constraint::Length(3), // Deduction
            Constraint::Length(3), // Weight
            Constraint::Length(1), // Grade
            Constraint::Length(1), // Weight shortcuts
            Constraint::Length(1), // Spacer
            Constraint::Length(5), // Result
            Constraint::Min(0),
        ])
        .split(inner);

    for (i, field) in Field::ALL.into_iter().enumerate() {
        render_form_field(frame, chunks[i], app, view, field);
    }

    let grade = InlineStat::new("Grade [g]:", view.fields.grade.to_string()).value_color(t.gold);
    frame.render_widget(Paragraph::new(grade.to_line()), chunks[3]);

    let mut presets = vec![Span::styled("Weight ", t.subtitle())];
    for (i, grams) in view.weight_presets.iter().enumerate() {
        presets.push(Span::styled(format!("[{}]", i + 1), t.title()));
        presets.push(Span::styled(format!(" {} g  ", grams.normalize()), t.text()));
    }
    frame.render_widget(
        Paragraph::new(Line::from(presets)).wrap(Wrap { trim: true }),
        chunks[4],
    );

    render_result(frame, chunks[6], view);
}

fn render_form_field(frame: &mut Frame, area: Rect, app: &App, view: &ViewState, field: Field) {
    let t = theme();
    let (label, unit) = field_label(field);
    let is_active = view.focused == Some(field);
    let flagged = view.is_flagged(field);

    let border_style = if flagged {
        t.border_error()
    } else if is_active {
        t.border_active()
    } else {
        t.border_inactive()
    };

    let title_style = if flagged {
        t.error_style()
    } else if is_active {
        t.title()
    } else {
        t.subtitle()
    };

    let block = Block::default()
        .title(Span::styled(format!(" {} ({}) ", label, unit), title_style))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    let inner = block.inner(area);

    let value = if is_active && app.editing() == Some(field) {
        app.input.value()
    } else {
        view.fields.get(field)
    };

    let value_style = if flagged {
        t.error_style()
    } else if value.is_empty() {
        t.subtitle().add_modifier(Modifier::ITALIC)
    } else {
        t.text()
    };
    let shown = if value.is_empty() && !is_active {
        "0"
    } else {
        value
    };

    frame.render_widget(Paragraph::new(Span::styled(shown, value_style)).block(block), area);

    if is_active && app.editing() == Some(field) {
        let cursor_x = inner.x + app.input.visual_cursor() as u16;
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
    }
}

fn render_result(frame: &mut Frame, area: Rect, view: &ViewState) {
    let t = theme();

    let card = if view.result_is_error {
        StatCard::new("Buy-back price", &view.result)
            .value_color(t.error)
            .subtitle("Values must not be negative")
    } else if view.glowing {
        StatCard::new("Buy-back price", &view.result)
            .value_style(t.glow())
            .highlighted(true)
    } else {
        StatCard::new("Buy-back price", &view.result).value_color(t.gold)
    };

    card.render(frame, area);
}

// ═══════════════════════════════════════════════════════════════════════════
// PLACEHOLDER
// ═══════════════════════════════════════════════════════════════════════════

fn render_placeholder(frame: &mut Frame, area: Rect, mode: Mode) {
    let t = theme();

    let lines = vec![
        Line::from(Span::styled(mode.title(), t.title())),
        Line::from(""),
        Line::from(Span::styled("Coming soon", t.text())),
        Line::from(""),
        Line::from(vec![
            Span::styled(icons::BACK, t.title()),
            Span::styled(" Esc to return to the menu", t.subtitle()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(t.border_inactive())
        .padding(Padding::uniform(1))
        .style(t.bg());

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        centered_rect(60, 50, area),
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// STATUS BAR
// ═══════════════════════════════════════════════════════════════════════════

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App, view: &ViewState) {
    let t = theme();

    let screen_name = match view.screen {
        Screen::Menu => "MENU",
        Screen::Calculator(_) => "CALCULATOR",
        Screen::Placeholder(_) => "COMING SOON",
    };

    let status = if let Some((msg, kind)) = &app.message {
        let color = match kind {
            MessageType::Warning => t.error,
            MessageType::Info => t.accent,
        };
        Span::styled(format!(" {} ", msg), Style::default().bg(color).fg(t.slate))
    } else {
        Span::styled(
            format!(" {} ", screen_name),
            Style::default().bg(t.slate_light).fg(t.text_muted),
        )
    };

    let hint = match view.screen {
        Screen::Menu => " [↑↓] Navigate  [Enter] Select  [Q] Quit ",
        Screen::Calculator(_) if app.editing().is_some() => {
            " [Tab] Next field  [Esc] Done editing  [Ctrl-C] Quit "
        }
        Screen::Calculator(_) => " [Tab] Edit  [1-9] Weight  [G] Grade  [Esc] Back  [Q] Quit ",
        Screen::Placeholder(_) => " [Esc] Back  [Q] Quit ",
    };

    let bar = Line::from(vec![
        status,
        Span::styled(format!(" {} ", icons::SEPARATOR), t.subtitle()),
        Span::styled(hint, t.subtitle()),
    ]);

    frame.render_widget(Paragraph::new(bar).style(t.bg()), area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
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

#[cfg(test)]
#[path = "ui_tests.rs"]
mod ui_tests;
