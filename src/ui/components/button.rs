//! Button component for TUI

use crate::ui::theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Primary,
    Secondary,
}

/// A button label with its key binding, e.g. `OK (Enter)`
pub struct Button<'a> {
    pub label: &'a str,
    pub shortcut: &'a str,
    pub kind: ButtonKind,
}

impl Button<'_> {
    pub fn content(&self) -> String {
        format!(" {} ({}) ", self.label, self.shortcut)
    }

    /// Total width including borders
    pub fn width(&self) -> u16 {
        self.content().chars().count() as u16 + 2
    }
}

/// Render a button with border
pub fn render_button(frame: &mut Frame, area: Rect, button: &Button) {
    let (border_style, text_style) = match button.kind {
        ButtonKind::Primary => (
            Style::default().fg(theme::ACCENT),
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        ButtonKind::Secondary => (
            Style::default().fg(theme::MUTED),
            Style::default().fg(theme::SECONDARY),
        ),
    };

    let paragraph = Paragraph::new(button.content()).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
