//! Layout components (header, centred column, status bar)

use super::{logo, theme};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{FeedbackFocus, Route, Step};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form column gets on large terminals
pub const CONTENT_MAX_WIDTH: u16 = 72;

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(logo::height(area.width) + 1), // Header
            Constraint::Min(0),                               // Content
            Constraint::Length(1),                            // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Horizontally centred column no wider than `max_width`
pub fn centered(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    let hints = get_hints(app);
    spans.push(Span::styled(hints, Style::default().fg(theme::SECONDARY)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(theme::SUCCESS)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::MUTED));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget = Paragraph::new(quit_hint)
        .style(Style::default().bg(theme::MUTED).fg(theme::SECONDARY));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current page
fn get_hints(app: &App) -> String {
    if app.state.is_submitting() {
        return "Submitting...".to_string();
    }
    match app.state.route {
        Route::RegisterInterest if app.state.interest.is_submitted => {
            "i/l:copy link  q:quit".to_string()
        }
        Route::RegisterInterest => "Enter:join  ↑/↓:scroll".to_string(),
        Route::Wizard => step_hints(app.state.wizard.step(), app.state.wizard.feedback_focus),
    }
}

fn step_hints(step: Step, focus: FeedbackFocus) -> String {
    let skip = if step.allows_skip_submit() {
        format!("  {}:skip & submit", SUBMIT_SHORTCUT)
    } else {
        String::new()
    };
    let back = if step == Step::FIRST { "" } else { "  Esc:back" };

    match step {
        Step::Email | Step::CurrentPrice | Step::WeeklyVolume | Step::CurrentSystem => {
            format!("Enter:next{back}{skip}")
        }
        Step::PriceIncrease => format!("←/→:±$1  PgUp/PgDn:±$10  Enter:next{back}"),
        Step::Results => format!("←/→:±1%  PgUp/PgDn:±5%  Enter:next{back}"),
        Step::Mobile => format!("↑/↓:country  Enter:next{back}{skip}"),
        Step::Role => format!("↑/↓ or 1-3:choose  Enter:next{back}{skip}"),
        Step::Feedback => {
            let field = match focus {
                FeedbackFocus::Appeal => "←/→ or 1-5:rate  ",
                FeedbackFocus::RevenueSharing => "Space or y/n:choose  ",
                FeedbackFocus::Challenges | FeedbackFocus::DesiredFeatures => "",
            };
            format!("{field}Tab:next field  Enter or {SUBMIT_SHORTCUT}:submit{back}")
        }
        Step::Confirmation => "i/l:copy link  q:quit".to_string(),
    }
}
