//! Wizard progress gauge

use super::theme;
use crate::state::Step;
use ratatui::{layout::Rect, style::Style, widgets::Gauge, Frame};

pub fn label(step: Step) -> String {
    format!("Step {} of {}", step.number(), Step::TOTAL)
}

pub fn draw(frame: &mut Frame, area: Rect, step: Step) {
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme::BRAND).bg(theme::MUTED))
        .percent(step.progress_percent())
        .label(label(step));
    frame.render_widget(gauge, area);
}
