//! Loading screen rendering with the wordmark

use super::{logo, theme};
use crate::state::SplashState;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the loading screen
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState) {
    let mut lines = logo::lines(area.width);
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("Loading{:<3}", ".".repeat(splash_state.dots())),
        Style::default().fg(theme::MUTED),
    )));

    let logo_height = lines.len() as u16;

    // Centre vertically, then shift up by the scroll offset (can go above screen)
    let base_y = area.y as i32 + (area.height.saturating_sub(logo_height)) as i32 / 2;
    let y_pos = base_y - splash_state.scroll_offset as i32;

    let lines_off_top = if y_pos < 0 { (-y_pos) as usize } else { 0 };
    if lines_off_top >= lines.len() {
        return;
    }

    let visible_lines: Vec<Line> = lines.into_iter().skip(lines_off_top).collect();
    let visible_height = visible_lines.len() as u16;
    let render_y = if y_pos < 0 { area.y } else { y_pos as u16 };

    let logo_area = Rect {
        x: area.x,
        y: render_y,
        width: area.width,
        height: visible_height.min(area.height.saturating_sub(render_y.saturating_sub(area.y))),
    };
    frame.render_widget(
        Paragraph::new(visible_lines).alignment(Alignment::Center),
        logo_area,
    );

    // Skip hint at the bottom, only while the logo is still
    if splash_state.scroll_offset < 1.0 && area.height > 2 {
        let hint_area = Rect {
            x: area.x,
            y: area.y + area.height - 2,
            width: area.width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Press any key to skip",
                Style::default().fg(theme::MUTED),
            )))
            .alignment(Alignment::Center),
            hint_area,
        );
    }
}
