//! Wordmark rendering
//!
//! Wide terminals get the block-letter logo, narrow ones a single-line
//! wordmark, mirroring the desktop/mobile logo swap of the web page.

use crate::ui::theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const WORD: &str = "UNBOOKED";
const GLYPH_HEIGHT: usize = 5;

/// Below this width the compact wordmark is used
pub const WIDE_MIN_WIDTH: u16 = 60;

fn glyph(c: char) -> [&'static str; GLYPH_HEIGHT] {
    match c {
        'U' => ["█   █", "█   █", "█   █", "█   █", " ███ "],
        'N' => ["█   █", "██  █", "█ █ █", "█  ██", "█   █"],
        'B' => ["████ ", "█   █", "████ ", "█   █", "████ "],
        'O' => [" ███ ", "█   █", "█   █", "█   █", " ███ "],
        'K' => ["█   █", "█  █ ", "███  ", "█  █ ", "█   █"],
        'E' => ["█████", "█    ", "████ ", "█    ", "█████"],
        'D' => ["████ ", "█   █", "█   █", "█   █", "████ "],
        _ => ["     "; GLYPH_HEIGHT],
    }
}

/// Block-letter rows of the wordmark
pub fn block_rows() -> Vec<String> {
    (0..GLYPH_HEIGHT)
        .map(|row| {
            WORD.chars()
                .map(|c| glyph(c)[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

pub fn is_wide(width: u16) -> bool {
    width >= WIDE_MIN_WIDTH
}

/// Rows the logo occupies at this terminal width
pub fn height(width: u16) -> u16 {
    if is_wide(width) {
        GLYPH_HEIGHT as u16
    } else {
        1
    }
}

/// Styled logo lines for this width
pub fn lines(width: u16) -> Vec<Line<'static>> {
    let style = Style::default()
        .fg(theme::BRAND)
        .add_modifier(Modifier::BOLD);
    if is_wide(width) {
        block_rows()
            .into_iter()
            .map(|row| Line::from(Span::styled(row, style)))
            .collect()
    } else {
        vec![Line::from(Span::styled("◆ unbooked", style))]
    }
}

/// Draw the logo centred in `area`
pub fn draw(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(lines(area.width)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
