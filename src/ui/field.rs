//! Field rendering utilities for the wizard forms

use super::theme;
use crate::state::InputField;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Input box height (top border + content + bottom border)
pub const FIELD_HEIGHT: u16 = 3;

fn border_style(is_active: bool, has_error: bool) -> Style {
    if has_error {
        Style::default().fg(theme::ERROR)
    } else if is_active {
        Style::default().fg(theme::ACCENT)
    } else {
        Style::default().fg(theme::MUTED)
    }
}

/// Content line for an input: value with cursor, or the placeholder
pub fn input_line(field: &InputField, is_active: bool) -> Line<'static> {
    let cursor = if is_active { "▌" } else { "" };
    if field.is_empty() {
        Line::from(vec![
            Span::styled(cursor, Style::default().fg(theme::ACCENT)),
            Span::styled(
                field.placeholder,
                Style::default()
                    .fg(theme::MUTED)
                    .add_modifier(Modifier::ITALIC),
            ),
        ])
    } else {
        Line::from(vec![
            Span::raw(field.value().to_string()),
            Span::styled(cursor, Style::default().fg(theme::ACCENT)),
        ])
    }
}

/// Draw a bordered single-line input titled with the field label
pub fn draw_input(
    frame: &mut Frame,
    area: Rect,
    field: &InputField,
    is_active: bool,
    has_error: bool,
) {
    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, has_error));

    frame.render_widget(
        Paragraph::new(input_line(field, is_active)).block(block),
        area,
    );
}

/// Bordered box around arbitrary content, styled like an input
pub fn draw_boxed(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    content: Line<'_>,
    is_active: bool,
    has_error: bool,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, has_error));
    frame.render_widget(Paragraph::new(content).block(block), area);
}

pub fn draw_error(frame: &mut Frame, area: Rect, message: &str) {
    let line = Line::from(Span::styled(
        format!("✗ {message}"),
        Style::default().fg(theme::ERROR),
    ));
    frame.render_widget(Paragraph::new(line), area);
}
