//! Register-interest landing page and its confirmation

use super::components::{render_button, spinner, Button, ButtonKind, BUTTON_HEIGHT};
use super::field::{draw_error, draw_input, FIELD_HEIGHT};
use super::{summary, theme};
use crate::app::App;
use crate::state::ValidationError;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// One line of the landing copy
#[derive(Debug, Clone, Copy)]
enum Prose {
    Hero(&'static str),
    Heading(&'static str),
    Text(&'static str),
    Quote(&'static str),
    Bullet(&'static str),
    Blank,
}

const LANDING: &[Prose] = &[
    Prose::Hero("Join the booking revolution"),
    Prose::Text("The first platform that turns your \"fully booked\" into a marketplace."),
    Prose::Text("Finally get paid what you're truly worth."),
    Prose::Blank,
    Prose::Text("Early access coming soon. Register for updates below."),
    Prose::Blank,
    Prose::Heading("The hidden problem with traditional booking"),
    Prose::Text("Once you're booked, the opportunity is closed. But what if someone else values that time slot more?"),
    Prose::Blank,
    Prose::Quote("Traditional booking: \"Sorry, I'm fully booked on Tuesday at 2PM.\""),
    Prose::Text("  Opportunity closed. Money left on the table."),
    Prose::Quote("Unbooked marketplace: \"I'm booked at 2PM for $50, but I'm open to offers.\""),
    Prose::Text("  Opportunity multiplied. Maximum value captured."),
    Prose::Blank,
    Prose::Heading("The four-step process"),
    Prose::Bullet("1. You get booked. A client books your 2PM slot for $50."),
    Prose::Bullet("2. Offers start coming. Other clients offer more: \"I'll pay $100 for that 2PM slot.\""),
    Prose::Bullet("3. The original client decides. They have 10 minutes to accept or decline and stay in control."),
    Prose::Bullet("4. Everyone wins. The original client is paid from the surplus, you earn more, the new client gets the slot."),
    Prose::Blank,
    Prose::Heading("Real example"),
    Prose::Bullet("$50   Original booking, Tuesday 2PM"),
    Prose::Bullet("$100  Competing offer, same slot"),
    Prose::Bullet("+$50  Total value, a 100% increase shared between you and the original client"),
    Prose::Blank,
    Prose::Heading("Ready to stop leaving money on the table?"),
    Prose::Text("Get early access and be among the first to get paid what you're truly worth."),
    Prose::Text("Free to start • Dynamic offers • Maximum value"),
];

const NEXT_STEPS: [&str; 3] = [
    "We'll send you exclusive updates as we build the platform",
    "You'll get early access to our pilot program",
    "We'll reach out when we're ready to help you maximize your revenue",
];

/// Furthest the landing copy can scroll
pub fn max_scroll() -> u16 {
    LANDING.len().saturating_sub(1) as u16
}

fn landing_lines() -> Vec<Line<'static>> {
    LANDING
        .iter()
        .map(|copy| match *copy {
            Prose::Hero(text) => Line::from(Span::styled(
                text,
                Style::default()
                    .fg(theme::BRAND)
                    .add_modifier(Modifier::BOLD),
            )),
            Prose::Heading(text) => Line::from(Span::styled(
                text,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Prose::Text(text) => Line::from(Span::styled(
                text,
                Style::default().fg(theme::SECONDARY),
            )),
            Prose::Quote(text) => Line::from(Span::styled(
                text,
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            Prose::Bullet(text) => Line::from(vec![
                Span::styled("• ", Style::default().fg(theme::ACCENT)),
                Span::raw(text),
            ]),
            Prose::Blank => Line::default(),
        })
        .collect()
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    if app.state.interest.is_submitted {
        draw_submitted(frame, area);
    } else {
        draw_landing(frame, area, app);
    }
}

fn draw_landing(frame: &mut Frame, area: Rect, app: &App) {
    let interest = &app.state.interest;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),                // Landing copy
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(1),             // Error
            Constraint::Length(BUTTON_HEIGHT), // Button
        ])
        .split(area);

    let copy = Paragraph::new(landing_lines())
        .wrap(Wrap { trim: false })
        .scroll((interest.scroll, 0));
    frame.render_widget(copy, chunks[0]);

    draw_input(frame, chunks[1], &interest.email, true, interest.email_error);
    if interest.email_error {
        draw_error(frame, chunks[2], &ValidationError::InvalidEmail.to_string());
    }

    let label = if interest.is_submitting {
        let elapsed = app
            .submit_started
            .map(|started| started.elapsed())
            .unwrap_or_default();
        format!("Joining {}", spinner::frame(elapsed))
    } else {
        "Join the waitlist".to_string()
    };
    let button = Button {
        label: &label,
        shortcut: "Enter",
        kind: ButtonKind::Primary,
    };
    let width = button.width().min(chunks[3].width);
    render_button(
        frame,
        Rect::new(chunks[3].x, chunks[3].y, width, chunks[3].height),
        &button,
    );
}

fn submitted_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "✓ You're on the list!",
            Style::default()
                .fg(theme::SUCCESS)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Thanks for your interest in Unbooked. We'll keep you updated on our progress.",
            Style::default().fg(theme::SECONDARY),
        )),
        Line::default(),
        Line::from(Span::styled(
            "What happens next?",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(NEXT_STEPS.iter().map(|step| {
        Line::from(vec![
            Span::styled("  • ", Style::default().fg(theme::ACCENT)),
            Span::raw(*step),
        ])
    }));
    lines.push(Line::default());
    lines.extend(summary::social_lines());
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Press q to quit",
        Style::default().fg(theme::MUTED),
    )));
    lines
}

fn draw_submitted(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(submitted_lines()).wrap(Wrap { trim: false }),
        area,
    );
}
