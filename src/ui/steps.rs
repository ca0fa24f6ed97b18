//! Per-step wizard views

use super::components::{render_button, slider, spinner, Button, ButtonKind, BUTTON_HEIGHT};
use super::field::{draw_boxed, draw_error, draw_input, FIELD_HEIGHT};
use super::{phone_field, progress, summary, theme};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{
    FeedbackFocus, FormFields, RevenueSharing, Role, Step, ValidationError, APPEAL_MAX,
    APPEAL_MIN, PRICE_INCREASE_MIN, RETENTION_MAX, RETENTION_MIN,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Draws the body of one step
pub type StepView = fn(&mut Frame, Rect, &App);

const SLIDER_WIDTH: usize = 40;

/// View for each step
pub fn builder(step: Step) -> StepView {
    match step {
        Step::Email => draw_email,
        Step::CurrentPrice => draw_current_price,
        Step::WeeklyVolume => draw_weekly_volume,
        Step::PriceIncrease => draw_price_increase,
        Step::Results => draw_results,
        Step::Mobile => draw_mobile,
        Step::Role => draw_role,
        Step::CurrentSystem => draw_current_system,
        Step::Feedback => draw_feedback,
        Step::Confirmation => summary::draw,
    }
}

pub fn title(step: Step) -> &'static str {
    match step {
        Step::Email => "What's your email?",
        Step::CurrentPrice => "What do you charge per booking?",
        Step::WeeklyVolume => "How many bookings do you take each week?",
        Step::PriceIncrease => "How much could you raise prices at peak times?",
        Step::Results => "Your projected revenue",
        Step::Mobile => "What's your mobile number?",
        Step::Role => "Are you a service provider, a client, or both?",
        Step::CurrentSystem => "How do you take bookings today?",
        Step::Feedback => "A few last questions",
        Step::Confirmation => "Thanks for joining the waiting list!",
    }
}

fn subtitle(step: Step) -> Option<&'static str> {
    match step {
        Step::Email => Some("We'll let you know as soon as early access opens."),
        Step::PriceIncrease => Some("Dynamic pricing lets in-demand slots earn more."),
        Step::Results => Some("Adjust how many customers you expect to keep."),
        Step::Mobile | Step::Role | Step::CurrentSystem => {
            Some("Optional. You can skip ahead and submit now.")
        }
        _ => None,
    }
}

/// Draw the wizard: progress, question, step body and buttons
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let step = app.state.wizard.step();
    if step.is_terminal() {
        summary::draw(frame, area, app);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Progress
            Constraint::Length(1),             // Spacer
            Constraint::Length(2),             // Title + subtitle
            Constraint::Length(1),             // Spacer
            Constraint::Min(3),                // Step body
            Constraint::Length(BUTTON_HEIGHT), // Buttons
        ])
        .split(area);

    progress::draw(frame, chunks[0], step);
    draw_title(frame, chunks[2], step);
    builder(step)(frame, chunks[4], app);
    draw_buttons(frame, chunks[5], app, step);
}

fn draw_title(frame: &mut Frame, area: Rect, step: Step) {
    let mut lines = vec![Line::from(Span::styled(
        format!("{}. {}", step.number(), title(step)),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(sub) = subtitle(step) {
        lines.push(Line::from(Span::styled(
            sub,
            Style::default().fg(theme::SECONDARY),
        )));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

/// Button labels for a step, left to right
pub fn button_row(
    step: Step,
    is_submitting: bool,
    spinner_frame: &str,
) -> Vec<(String, &'static str, ButtonKind)> {
    let mut buttons = Vec::new();
    if step != Step::FIRST {
        buttons.push(("Previous".to_string(), "Esc", ButtonKind::Secondary));
    }
    if step.allows_skip_submit() {
        let skip = if is_submitting {
            format!("Submitting {spinner_frame}")
        } else {
            "Skip & submit".to_string()
        };
        buttons.push((skip, SUBMIT_SHORTCUT, ButtonKind::Secondary));
    }
    let primary = if step.is_final_input() && is_submitting {
        format!("Submitting {spinner_frame}")
    } else if step.is_final_input() {
        "Submit".to_string()
    } else {
        "OK".to_string()
    };
    buttons.push((primary, "Enter", ButtonKind::Primary));
    buttons
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App, step: Step) {
    let elapsed = app
        .submit_started
        .map(|started| started.elapsed())
        .unwrap_or_default();
    let row = button_row(step, app.state.wizard.is_submitting, spinner::frame(elapsed));
    let buttons: Vec<Button> = row
        .iter()
        .map(|(label, shortcut, kind)| Button {
            label: label.as_str(),
            shortcut: *shortcut,
            kind: *kind,
        })
        .collect();

    let mut x = area.x;
    for button in &buttons {
        let width = button.width().min(area.right().saturating_sub(x));
        if width == 0 {
            break;
        }
        render_button(frame, Rect::new(x, area.y, width, area.height), button);
        x += width + 1;
    }
}

/// Input box with its inline error line underneath
fn input_with_error(
    frame: &mut Frame,
    area: Rect,
    field: &crate::state::InputField,
    error: Option<ValidationError>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(FIELD_HEIGHT), Constraint::Length(1)])
        .split(area);
    draw_input(frame, chunks[0], field, true, error.is_some());
    if let Some(error) = error {
        draw_error(frame, chunks[1], &error.to_string());
    }
}

fn draw_email(frame: &mut Frame, area: Rect, app: &App) {
    let wizard = &app.state.wizard;
    let error = wizard.errors.email.then_some(ValidationError::InvalidEmail);
    input_with_error(frame, area, &wizard.fields.email, error);
}

fn draw_current_price(frame: &mut Frame, area: Rect, app: &App) {
    let wizard = &app.state.wizard;
    let error = wizard.errors.price.then_some(ValidationError::InvalidPrice);
    input_with_error(frame, area, &wizard.fields.current_price, error);
}

fn draw_weekly_volume(frame: &mut Frame, area: Rect, app: &App) {
    let wizard = &app.state.wizard;
    let error = wizard.errors.volume.then_some(ValidationError::InvalidVolume);
    input_with_error(frame, area, &wizard.fields.weekly_volume, error);
}

fn slider_line(value: u32, min: u32, max: u32, label: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            slider::track(value, min, max, SLIDER_WIDTH),
            Style::default().fg(theme::BRAND),
        ),
        Span::styled(format!(" {label}"), Style::default().add_modifier(Modifier::BOLD)),
    ])
}

/// Price increase slider, labelled in dollars
pub fn price_increase_lines(fields: &FormFields) -> Vec<Line<'static>> {
    let mut lines = vec![
        slider_line(
            fields.price_increase,
            PRICE_INCREASE_MIN,
            fields.price_increase_max(),
            format!("+${}", fields.price_increase),
        ),
        Line::default(),
    ];
    if let (Some(price), Some(peak)) = (fields.price(), fields.peak_price()) {
        lines.push(Line::from(vec![
            Span::styled("Peak price: ", Style::default().fg(theme::SECONDARY)),
            Span::raw(format!("${price:.2} → ")),
            Span::styled(
                format!("${peak:.2}"),
                Style::default().fg(theme::SUCCESS),
            ),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled(
            "Predicted customer retention: ",
            Style::default().fg(theme::SECONDARY),
        ),
        Span::raw(format!("{}%", fields.retention)),
    ]));
    lines
}

fn draw_price_increase(frame: &mut Frame, area: Rect, app: &App) {
    let lines = price_increase_lines(&app.state.wizard.fields);
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_results(frame: &mut Frame, area: Rect, app: &App) {
    let fields = &app.state.wizard.fields;
    // Retention is shown as the slider below, not as a recap row
    let mut lines: Vec<Line> = summary::projection_lines(fields)
        .into_iter()
        .take(3)
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Customers retained",
        Style::default().fg(theme::SECONDARY),
    )));
    lines.push(slider_line(
        fields.retention,
        RETENTION_MIN,
        RETENTION_MAX,
        format!("{}%", fields.retention),
    ));
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_mobile(frame: &mut Frame, area: Rect, app: &App) {
    let wizard = &app.state.wizard;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);
    phone_field::draw(frame, chunks[0], &wizard.fields.mobile, wizard.errors.phone);
    if wizard.errors.phone {
        draw_error(frame, chunks[1], &ValidationError::InvalidPhone.to_string());
    }
    let country = Line::from(Span::styled(
        format!("{} (↑/↓ to change)", wizard.fields.mobile.country_code.name()),
        Style::default().fg(theme::SECONDARY),
    ));
    frame.render_widget(Paragraph::new(country), chunks[2]);
}

fn draw_role(frame: &mut Frame, area: Rect, app: &App) {
    let selected = app.state.wizard.fields.role;
    let lines: Vec<Line> = Role::ALL
        .iter()
        .enumerate()
        .map(|(idx, role)| {
            let is_selected = selected == Some(*role);
            let marker = if is_selected { "(•)" } else { "( )" };
            let style = if is_selected {
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(
                format!("{} {} {}", idx + 1, marker, role.label()),
                style,
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_current_system(frame: &mut Frame, area: Rect, app: &App) {
    input_with_error(frame, area, &app.state.wizard.fields.current_system, None);
}

pub fn appeal_line(value: u8) -> Line<'static> {
    let spans: Vec<Span> = (APPEAL_MIN..=APPEAL_MAX)
        .map(|n| {
            if n == value {
                Span::styled(
                    format!("[{n}]"),
                    Style::default()
                        .fg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(format!(" {n} "), Style::default().fg(theme::SECONDARY))
            }
        })
        .collect();
    Line::from(spans)
}

fn revenue_sharing_line(value: Option<RevenueSharing>) -> Line<'static> {
    let option = |label: &'static str, choice: RevenueSharing| {
        let marker = if value == Some(choice) { "(•)" } else { "( )" };
        Span::raw(format!("{marker} {label}   "))
    };
    Line::from(vec![
        option("Yes", RevenueSharing::Yes),
        option("No", RevenueSharing::No),
    ])
}

fn draw_feedback(frame: &mut Frame, area: Rect, app: &App) {
    let wizard = &app.state.wizard;
    let fields = &wizard.fields;
    let focus = wizard.feedback_focus;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    draw_input(
        frame,
        chunks[0],
        &fields.current_challenges,
        focus == FeedbackFocus::Challenges,
        false,
    );
    draw_boxed(
        frame,
        chunks[1],
        "How appealing is a dynamic booking marketplace? (1-5)",
        appeal_line(fields.dynamic_booking_appeal),
        focus == FeedbackFocus::Appeal,
        false,
    );
    draw_boxed(
        frame,
        chunks[2],
        "Interested in revenue sharing if your slot is resold?",
        revenue_sharing_line(fields.revenue_sharing),
        focus == FeedbackFocus::RevenueSharing,
        false,
    );
    draw_input(
        frame,
        chunks[3],
        &fields.desired_features,
        focus == FeedbackFocus::DesiredFeatures,
        false,
    );

    if wizard.is_submitting {
        let note = Paragraph::new(Span::styled(
            "Sending your answers...",
            Style::default().fg(theme::SECONDARY),
        ))
        .wrap(Wrap { trim: true });
        frame.render_widget(note, chunks[4]);
    }
}
