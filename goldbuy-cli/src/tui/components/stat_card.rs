//! Stat Card Widget
//!
//! A card showing a label above a large value. Used for the price result.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::super::theme::theme;

pub struct StatCard<'a> {
    title: &'a str,
    value: &'a str,
    value_style: Style,
    highlighted: bool,
    subtitle: Option<&'a str>,
}

impl<'a> StatCard<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            value_style: Style::default()
                .fg(theme().text_primary)
                .add_modifier(Modifier::BOLD),
            highlighted: false,
            subtitle: None,
        }
    }

    /// Replaces the whole value style, e.g. for the glow.
    pub fn value_style(mut self, style: Style) -> Self {
        self.value_style = style;
        self
    }

    pub fn value_color(mut self, color: Color) -> Self {
        self.value_style = self.value_style.fg(color);
        self
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    pub fn subtitle(mut self, subtitle: &'a str) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let t = theme();

        let border_style = if self.highlighted {
            t.border_active()
        } else {
            t.border_inactive()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(t.bg());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let content = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(1), // Value
                Constraint::Min(0),    // Subtitle
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(self.title)
                .style(t.subtitle())
                .alignment(Alignment::Left),
            content[0],
        );

        frame.render_widget(
            Paragraph::new(Span::styled(self.value, self.value_style)).alignment(Alignment::Left),
            content[1],
        );

        if let Some(subtitle) = self.subtitle {
            frame.render_widget(
                Paragraph::new(subtitle)
                    .style(Style::default().fg(t.text_muted))
                    .alignment(Alignment::Left),
                content[2],
            );
        }
    }
}

/// A compact inline stat display (label: value).
pub struct InlineStat<'a> {
    label: &'a str,
    value: String,
    value_color: Color,
}

impl<'a> InlineStat<'a> {
    pub fn new(label: &'a str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            value_color: theme().text_primary,
        }
    }

    pub fn value_color(mut self, color: Color) -> Self {
        self.value_color = color;
        self
    }

    pub fn to_line(&self) -> Line<'a> {
        Line::from(vec![
            Span::styled(self.label, Style::default().fg(theme().text_muted)),
            Span::raw(" "),
            Span::styled(
                self.value.clone(),
                Style::default()
                    .fg(self.value_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    }
}
