//! Thank-you screens shared by the wizard and the register-interest page

use super::theme;
use crate::app::{App, SocialLink};
use crate::revenue::format_dollars;
use crate::state::FormFields;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// "Follow us" lines with the key that copies each link
pub fn social_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "Follow along",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for link in SocialLink::ALL {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  [{}] ", link.key()),
                Style::default().fg(theme::ACCENT),
            ),
            Span::raw(format!("{:<10}", link.label())),
            Span::styled(link.url(), Style::default().fg(theme::SECONDARY)),
        ]));
    }
    lines
}

/// Recap of the revenue answers
pub fn projection_lines(fields: &FormFields) -> Vec<Line<'static>> {
    let projection = fields.projection();
    let row = |label: &'static str, value: String, style: Style| {
        Line::from(vec![
            Span::styled(format!("{label:<24}"), Style::default().fg(theme::SECONDARY)),
            Span::styled(value, style),
        ])
    };
    let bold = Style::default().add_modifier(Modifier::BOLD);
    vec![
        row("Current annual revenue", format_dollars(projection.current_annual), bold),
        row("Projected annual revenue", format_dollars(projection.new_annual), bold),
        row(
            "Extra revenue per year",
            format_dollars(projection.uplift),
            bold.fg(theme::SUCCESS),
        ),
        row("Retention assumed", format!("{}%", fields.retention), Style::default()),
    ]
}

/// Wizard confirmation: thanks, the revenue recap, then links
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let fields = &app.state.wizard.fields;
    let projection = fields.projection();
    let mut lines = vec![
        Line::from(Span::styled(
            "✓ Thanks for joining the waiting list!",
            Style::default()
                .fg(theme::SUCCESS)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "We'll be in touch as soon as early access opens.",
            Style::default().fg(theme::SECONDARY),
        )),
        Line::default(),
    ];

    if projection.current_annual > 0 {
        lines.extend(projection_lines(fields));
        lines.push(Line::default());
    }

    lines.extend(social_lines());
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Press q to quit",
        Style::default().fg(theme::MUTED),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
