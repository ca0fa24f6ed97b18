//! Mobile number input: country selector beside the local number

use super::field::{draw_boxed, draw_input};
use crate::state::MobileNumber;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    Frame,
};

const COUNTRY_WIDTH: u16 = 14;

pub fn country_label(mobile: &MobileNumber) -> String {
    let country = mobile.country_code;
    format!("{} {} ▾", country.region(), country.dial_code())
}

/// Invalid numbers only change the border colour, the message is drawn by the caller
pub fn draw(frame: &mut Frame, area: Rect, mobile: &MobileNumber, has_error: bool) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(COUNTRY_WIDTH), Constraint::Min(10)])
        .split(area);

    draw_boxed(
        frame,
        chunks[0],
        "Country",
        Line::from(country_label(mobile)),
        false,
        has_error,
    );
    draw_input(frame, chunks[1], &mobile.phone_number, true, has_error);
}
