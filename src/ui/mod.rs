//! UI module for rendering the TUI

mod components;
mod field;
mod layout;
mod logo;
mod phone_field;
mod progress;
pub mod register_interest;
mod splash;
mod steps;
mod summary;
mod theme;

use crate::app::App;
use crate::state::Route;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if let Some(ref splash_state) = app.splash_state {
        splash::draw(frame, area, splash_state);
        return;
    }

    let (header_area, content_area, status_area) = layout::create_layout(area);

    logo::draw(frame, header_area);

    let column = layout::centered(content_area, layout::CONTENT_MAX_WIDTH);
    match app.state.route {
        Route::Wizard => steps::draw(frame, column, app),
        Route::RegisterInterest => register_interest::draw(frame, column, app),
    }

    layout::draw_status_bar(frame, status_area, app);
}
