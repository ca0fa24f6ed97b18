//! Application state and core logic

use crate::platform::SUBMIT_MODIFIER;
use crate::state::{
    AppState, FeedbackFocus, PhoneEdit, RevenueSharing, Role, Route, SplashState, Step,
    Transition,
};
use crate::submission::{InterestPayload, LeadPayload, Submission, SubmissionClientTrait};
use crate::ui::register_interest;
use anyhow::Result;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Outbound links listed on the thank-you screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialLink {
    Instagram,
    LinkedIn,
}

impl SocialLink {
    pub const ALL: [SocialLink; 2] = [SocialLink::Instagram, SocialLink::LinkedIn];

    pub fn url(self) -> &'static str {
        match self {
            Self::Instagram => "https://instagram.com/unbookd",
            Self::LinkedIn => "https://www.linkedin.com/company/unbookd/",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::LinkedIn => "LinkedIn",
        }
    }

    pub fn key(self) -> char {
        match self {
            Self::Instagram => 'i',
            Self::LinkedIn => 'l',
        }
    }

    fn from_key(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.key() == c.to_ascii_lowercase())
    }
}

/// Why a send was made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPurpose {
    /// Partial record after a completed step
    Progressive(Step),
    /// Full record from submit / skip-and-submit
    Final,
    /// Register-interest page
    Interest,
}

/// Reported back to the UI task when a background send finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionEvent {
    pub purpose: SubmissionPurpose,
    pub succeeded: bool,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
    /// When the in-flight final send started, for the spinner
    pub submit_started: Option<Instant>,
    /// Tags every submission log line from this run
    pub session_id: Uuid,
    client: Arc<dyn SubmissionClientTrait>,
    events_tx: mpsc::UnboundedSender<SubmissionEvent>,
    events_rx: mpsc::UnboundedReceiver<SubmissionEvent>,
    quit: bool,
}

impl App {
    pub fn new(state: AppState, client: Arc<dyn SubmissionClientTrait>, show_splash: bool) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let session_id = Uuid::new_v4();
        info!(%session_id, route = ?state.route, "Session started");

        Self {
            state,
            splash_state: show_splash.then(SplashState::new),
            submit_started: None,
            session_id,
            client,
            events_tx,
            events_rx,
            quit: false,
        }
    }

    /// Update splash animation state.
    /// Returns true once the animation has finished.
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.splash_state = None;
                return true;
            }
        }
        false
    }

    pub fn in_splash(&self) -> bool {
        self.splash_state.is_some()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press on whichever page is active
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if let Some(ref mut splash) = self.splash_state {
            splash.skip();
            self.splash_state = None;
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        match self.state.route {
            Route::Wizard => self.handle_wizard_key(key),
            Route::RegisterInterest => self.handle_interest_key(key),
        }
        Ok(())
    }

    fn is_submit_shortcut(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Char('s') | KeyCode::Char('S'))
            && (key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(SUBMIT_MODIFIER))
    }

    /// Plain character input, without Ctrl/Alt chords
    fn typed_char(key: &KeyEvent) -> Option<char> {
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                Some(c)
            }
            _ => None,
        }
    }

    fn handle_wizard_key(&mut self, key: KeyEvent) {
        if self.state.wizard.is_submitting {
            return;
        }

        let step = self.state.wizard.step();
        if step.is_terminal() {
            self.handle_confirmation_key(key);
            return;
        }

        if Self::is_submit_shortcut(&key) {
            self.submit_wizard();
            return;
        }

        match key.code {
            KeyCode::Enter if step.is_final_input() => self.submit_wizard(),
            KeyCode::Enter => self.advance(),
            KeyCode::Esc => {
                self.state.wizard.prev();
            }
            _ => self.handle_step_input(step, key),
        }
    }

    /// Per-step field editing
    fn handle_step_input(&mut self, step: Step, key: KeyEvent) {
        let typed = Self::typed_char(&key);
        let fields = &mut self.state.wizard.fields;

        match step {
            Step::Email => {
                edit_text(&mut fields.email, typed, key.code);
            }
            Step::CurrentPrice => {
                if edit_text(&mut fields.current_price, typed, key.code) {
                    fields.apply_predicted_retention();
                }
            }
            Step::WeeklyVolume => {
                edit_text(&mut fields.weekly_volume, typed, key.code);
            }
            Step::PriceIncrease => {
                let delta = match key.code {
                    KeyCode::Right | KeyCode::Up => 1,
                    KeyCode::Left | KeyCode::Down => -1,
                    KeyCode::PageUp => 10,
                    KeyCode::PageDown => -10,
                    _ => 0,
                };
                if delta != 0 {
                    fields.adjust_price_increase(delta);
                }
            }
            Step::Results => {
                let delta = match key.code {
                    KeyCode::Right | KeyCode::Up => 1,
                    KeyCode::Left | KeyCode::Down => -1,
                    KeyCode::PageUp => 5,
                    KeyCode::PageDown => -5,
                    _ => 0,
                };
                if delta != 0 {
                    fields.adjust_retention(delta);
                }
            }
            Step::Mobile => {
                let edit = match (key.code, typed) {
                    (KeyCode::Up, _) => Some(PhoneEdit::PrevCountry),
                    (KeyCode::Down, _) => Some(PhoneEdit::NextCountry),
                    (KeyCode::Backspace, _) => Some(PhoneEdit::Pop),
                    (_, Some(c)) => Some(PhoneEdit::Push(c)),
                    _ => None,
                };
                if let Some(mobile) = edit.and_then(|e| fields.mobile.apply(e)) {
                    fields.mobile = mobile;
                }
            }
            Step::Role => match (key.code, typed) {
                (KeyCode::Up | KeyCode::Left, _) => fields.role = Some(Role::cycle(fields.role, false)),
                (KeyCode::Down | KeyCode::Right, _) => {
                    fields.role = Some(Role::cycle(fields.role, true))
                }
                (_, Some(c @ '1'..='3')) => {
                    let idx = c as usize - '1' as usize;
                    fields.role = Some(Role::ALL[idx]);
                }
                _ => {}
            },
            Step::CurrentSystem => {
                edit_text(&mut fields.current_system, typed, key.code);
            }
            Step::Feedback => self.handle_feedback_input(key, typed),
            Step::Confirmation => {}
        }

        self.state.wizard.revalidate();
    }

    fn handle_feedback_input(&mut self, key: KeyEvent, typed: Option<char>) {
        let wizard = &mut self.state.wizard;
        match key.code {
            KeyCode::Tab => {
                wizard.feedback_focus = wizard.feedback_focus.next();
                return;
            }
            KeyCode::BackTab => {
                wizard.feedback_focus = wizard.feedback_focus.prev();
                return;
            }
            _ => {}
        }

        let fields = &mut wizard.fields;
        match wizard.feedback_focus {
            FeedbackFocus::Challenges => {
                edit_text(&mut fields.current_challenges, typed, key.code);
            }
            FeedbackFocus::DesiredFeatures => {
                edit_text(&mut fields.desired_features, typed, key.code);
            }
            FeedbackFocus::Appeal => match (key.code, typed) {
                (KeyCode::Left | KeyCode::Down, _) => fields.adjust_appeal(-1),
                (KeyCode::Right | KeyCode::Up, _) => fields.adjust_appeal(1),
                (_, Some(c)) => {
                    if let Some(d) = c.to_digit(10) {
                        fields.set_appeal(d as u8);
                    }
                }
                _ => {}
            },
            FeedbackFocus::RevenueSharing => match (key.code, typed) {
                (KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down, _)
                | (_, Some(' ')) => {
                    fields.revenue_sharing = Some(RevenueSharing::toggle(fields.revenue_sharing));
                }
                (_, Some('y' | 'Y')) => fields.revenue_sharing = Some(RevenueSharing::Yes),
                (_, Some('n' | 'N')) => fields.revenue_sharing = Some(RevenueSharing::No),
                _ => {}
            },
        }
    }

    fn handle_confirmation_key(&mut self, key: KeyEvent) {
        match Self::typed_char(&key) {
            Some('q') | Some('Q') => self.quit = true,
            Some(c) => {
                if let Some(link) = SocialLink::from_key(c) {
                    self.copy_link(link);
                }
            }
            None => {}
        }
    }

    /// `next()` plus the progressive push for qualifying steps
    fn advance(&mut self) {
        match self.state.wizard.next() {
            Ok(Transition::Advanced {
                completed,
                progressive,
            }) => {
                debug!(step = completed.number(), "Step completed");
                if progressive {
                    self.submit_progressive(completed);
                }
            }
            Ok(Transition::Stayed) => {}
            Err(e) => debug!(step = self.state.wizard.step().number(), "Validation failed: {}", e),
        }
    }

    fn submit_progressive(&mut self, completed: Step) {
        if !self.state.wizard.has_email() {
            debug!(step = completed.number(), "No email yet, skipping progressive submission");
            return;
        }
        let payload = LeadPayload::from_fields(&self.state.wizard.fields, completed, Utc::now());
        self.spawn_best_effort(
            Submission::Lead(payload),
            SubmissionPurpose::Progressive(completed),
        );
    }

    /// Submit or skip-and-submit. Navigation to the confirmation screen
    /// happens when the send reports back, whatever the outcome.
    fn submit_wizard(&mut self) {
        if !self.state.wizard.begin_submit() {
            return;
        }
        self.submit_started = Some(Instant::now());
        let payload =
            LeadPayload::from_fields(&self.state.wizard.fields, Step::TERMINAL, Utc::now());
        self.spawn_best_effort(Submission::Lead(payload), SubmissionPurpose::Final);
    }

    fn handle_interest_key(&mut self, key: KeyEvent) {
        let interest = &mut self.state.interest;
        if interest.is_submitting {
            return;
        }

        if interest.is_submitted {
            self.handle_confirmation_key(key);
            return;
        }

        let max_scroll = register_interest::max_scroll();
        match (key.code, Self::typed_char(&key)) {
            (KeyCode::Enter, _) => self.submit_interest(),
            (KeyCode::Backspace, _) => interest.backspace(),
            (KeyCode::Up, _) => interest.scroll_by(-1, max_scroll),
            (KeyCode::Down, _) => interest.scroll_by(1, max_scroll),
            (KeyCode::PageUp, _) => interest.scroll_by(-10, max_scroll),
            (KeyCode::PageDown, _) => interest.scroll_by(10, max_scroll),
            (_, Some(c)) => interest.input_char(c),
            _ => {}
        }
    }

    fn submit_interest(&mut self) {
        match self.state.interest.begin_submit() {
            Ok(true) => {
                self.submit_started = Some(Instant::now());
                let payload = InterestPayload::new(self.state.interest.email.value(), Utc::now());
                self.spawn_best_effort(Submission::Interest(payload), SubmissionPurpose::Interest);
            }
            Ok(false) => {}
            Err(e) => debug!("Interest form rejected: {}", e),
        }
    }

    /// Send in the background. Failures are logged and otherwise ignored:
    /// the user is never shown a transport error and navigation never waits
    /// on anything but the completion event.
    fn spawn_best_effort(&self, submission: Submission, purpose: SubmissionPurpose) {
        let client = Arc::clone(&self.client);
        let events_tx = self.events_tx.clone();
        let session_id = self.session_id;

        tokio::spawn(async move {
            let kind = submission.kind();
            let email = submission.email().to_string();
            let succeeded = match client.send(submission).await {
                Ok(receipt) => {
                    info!(%session_id, %kind, %email, status = receipt.status, "Submission stored");
                    debug!(%session_id, reply = ?receipt.body, "Endpoint reply");
                    true
                }
                Err(e) => {
                    warn!(%session_id, %kind, %email, "Submission failed, continuing: {}", e);
                    false
                }
            };
            // Receiver is gone only if the app already exited
            let _ = events_tx.send(SubmissionEvent { purpose, succeeded });
        });
    }

    /// Apply every completion event that has arrived since the last frame
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: SubmissionEvent) {
        match event.purpose {
            SubmissionPurpose::Progressive(step) => {
                debug!(step = step.number(), succeeded = event.succeeded, "Progressive submission settled");
            }
            SubmissionPurpose::Final => {
                self.submit_started = None;
                self.state.wizard.finish_submit();
            }
            SubmissionPurpose::Interest => {
                self.submit_started = None;
                self.state.interest.finish_submit();
            }
        }
    }

    fn copy_link(&mut self, link: SocialLink) {
        let message = match copy_to_clipboard(link.url()) {
            Ok(()) => format!("{} link copied: {}", link.label(), link.url()),
            Err(e) => {
                warn!("Clipboard unavailable: {}", e);
                format!("{}: {}", link.label(), link.url())
            }
        };
        self.state.status_message = Some(message);
    }

    /// Wait for the next completion event and apply it
    #[cfg(test)]
    async fn next_event(&mut self) -> Option<SubmissionEvent> {
        let event = self.events_rx.recv().await?;
        self.apply_event(event);
        Some(event)
    }
}

/// Shared text editing for single-line inputs. Returns whether the value changed.
fn edit_text(field: &mut crate::state::InputField, typed: Option<char>, code: KeyCode) -> bool {
    match (code, typed) {
        (KeyCode::Backspace, _) => field.pop_char(),
        (_, Some(c)) => field.push_char(c),
        _ => false,
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CountryCode, WizardState};
    use crate::submission::{MockSubmissionClientTrait, SubmissionError, SubmissionReceipt};
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn ok_receipt() -> Result<SubmissionReceipt, SubmissionError> {
        Ok(SubmissionReceipt {
            status: 200,
            body: None,
        })
    }

    fn app_with(mock: MockSubmissionClientTrait, route: Route) -> App {
        App::new(
            AppState::new(route, CountryCode::Australia),
            Arc::new(mock),
            false,
        )
    }

    async fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    fn wizard_at(step: Step) -> WizardState {
        let mut wizard = WizardState::default();
        wizard.fields.email.set_value("jo@example.com");
        wizard.fields.current_price.set_value("50");
        wizard.fields.weekly_volume.set_value("50");
        wizard.fields.retention = 90;
        wizard.jump_to(step);
        wizard
    }

    mod splash {
        use super::*;

        #[tokio::test]
        async fn test_any_key_skips_splash() {
            let mut app = App::new(
                AppState::default(),
                Arc::new(MockSubmissionClientTrait::new()),
                true,
            );
            assert!(app.in_splash());
            app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
            assert!(!app.in_splash());
            assert!(app.state.wizard.fields.email.is_empty());
        }

        #[test]
        fn test_update_splash_without_splash_is_noop() {
            let mut app = App::new(
                AppState::default(),
                Arc::new(MockSubmissionClientTrait::new()),
                false,
            );
            assert!(!app.update_splash(24));
        }
    }

    mod wizard_navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_invalid_email_does_not_submit() {
            let mut mock = MockSubmissionClientTrait::new();
            mock.expect_send().times(0);
            let mut app = app_with(mock, Route::Wizard);

            type_str(&mut app, "abc").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(app.state.wizard.step(), Step::Email);
            assert!(app.state.wizard.errors.email);
        }

        #[tokio::test]
        async fn test_valid_email_advances_and_pushes_progressive() {
            let mut mock = MockSubmissionClientTrait::new();
            mock.expect_send()
                .withf(|s| {
                    matches!(s, Submission::Lead(p)
                        if p.step_completed == 1 && p.email == "jo@example.com")
                })
                .times(1)
                .returning(|_| ok_receipt());
            let mut app = app_with(mock, Route::Wizard);

            type_str(&mut app, "jo@example.com").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.wizard.step(), Step::CurrentPrice);

            let event = app.next_event().await.unwrap();
            assert_eq!(
                event,
                SubmissionEvent {
                    purpose: SubmissionPurpose::Progressive(Step::Email),
                    succeeded: true,
                }
            );
        }

        #[tokio::test]
        async fn test_typing_corrected_email_clears_flag() {
            let mut mock = MockSubmissionClientTrait::new();
            mock.expect_send().returning(|_| ok_receipt());
            let mut app = app_with(mock, Route::Wizard);

            type_str(&mut app, "jo@example").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(app.state.wizard.errors.email);

            type_str(&mut app, ".com").await;
            assert!(!app.state.wizard.errors.email);
        }

        #[tokio::test]
        async fn test_progressive_failure_never_blocks() {
            let mut mock = MockSubmissionClientTrait::new();
            mock.expect_send().times(1).returning(|_| {
                Err(SubmissionError::Status {
                    status: 502,
                    body: "bad gateway".to_string(),
                })
            });
            let mut app = app_with(mock, Route::Wizard);
            app.state.wizard = wizard_at(Step::CurrentPrice);

            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.wizard.step(), Step::WeeklyVolume);

            let event = app.next_event().await.unwrap();
            assert!(!event.succeeded);
            assert_eq!(app.state.wizard.step(), Step::WeeklyVolume);
            assert_eq!(app.state.status_message, None);
        }

        #[tokio::test]
        async fn test_progressive_skipped_without_email() {
            let mut mock = MockSubmissionClientTrait::new();
            mock.expect_send().times(0);
            let mut app = app_with(mock, Route::Wizard);
            let mut wizard = wizard_at(Step::CurrentPrice);
            wizard.fields.email.set_value("");
            app.state.wizard = wizard;

            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.wizard.step(), Step::WeeklyVolume);
        }

        #[tokio::test]
        async fn test_results_push_carries_projection() {
            let mut mock = MockSubmissionClientTrait::new();
            mock.expect_send()
                .withf(|s| {
                    matches!(s, Submission::Lead(p)
                        if p.step_completed == 5
                            && p.current_annual == 130_000
                            && p.new_annual == 140_400
                            && p.uplift == 10_400)
                })
                .times(1)
                .returning(|_| ok_receipt());
            let mut app = app_with(mock, Route::Wizard);
            app.state.wizard = wizard_at(Step::Results);

            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.wizard.step(), Step::Mobile);
            app.next_event().await.unwrap();
        }

        #[tokio::test]
        async fn test_esc_goes_back_without_submitting() {
            let mut mock = MockSubmissionClientTrait::new();
            mock.expect_send().times(0);
            let mut app = app_with(mock, Route::Wizard);
            app.state.wizard = wizard_at(Step::WeeklyVolume);

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.wizard.step(), Step::CurrentPrice);
        }

        #[tokio::test]
        async fn test_enter_on_feedback_does_not_skip_to_terminal_without_send() {
            let mut mock = MockSubmissionClientTrait::new();
            mock.expect_send()
                .withf(|s| matches!(s, Submission::Lead(p) if p.step_completed == 10))
                .times(1)
                .returning(|_| ok_receipt());
            let mut app = app_with(mock, Route::Wizard);
            app.state.wizard = wizard_at(Step::Feedback);

            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(app.state.wizard.is_submitting);
            assert_eq!(app.state.wizard.step(), Step::Feedback);

            app.next_event().await.unwrap();
            assert_eq!(app.state.wizard.step(), Step::Confirmation);
            assert!(!app.state.wizard.is_submitting);
        }
    }

    mod step_input {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_price_increase_slider_resuggests_retention() {
            let mut app = app_with(MockSubmissionClientTrait::new(), Route::Wizard);
            app.state.wizard = wizard_at(Step::PriceIncrease);

            app.handle_key(key(KeyCode::Right)).await.unwrap();
            assert_eq!(app.state.wizard.fields.price_increase, 11);
            // 22% increase predicts 86.8
            assert_eq!(app.state.wizard.fields.retention, 87);
        }

        #[tokio::test]
        async fn test_retention_override_on_results() {
            let mut app = app_with(MockSubmissionClientTrait::new(), Route::Wizard);
            app.state.wizard = wizard_at(Step::Results);

            app.handle_key(key(KeyCode::PageDown)).await.unwrap();
            assert_eq!(app.state.wizard.fields.retention, 85);
        }

        #[tokio::test]
        async fn test_mobile_edits_flow_through_phone_control() {
            let mut app = app_with(MockSubmissionClientTrait::new(), Route::Wizard);
            app.state.wizard = wizard_at(Step::Mobile);

            app.handle_key(key(KeyCode::Down)).await.unwrap();
            type_str(&mut app, "07700 900a123").await;

            let mobile = &app.state.wizard.fields.mobile;
            assert_eq!(mobile.country_code, CountryCode::UnitedKingdom);
            assert_eq!(mobile.phone_number.value(), "07700 900123");
        }

        #[tokio::test]
        async fn test_role_selection_by_digit() {
            let mut app = app_with(MockSubmissionClientTrait::new(), Route::Wizard);
            app.state.wizard = wizard_at(Step::Role);

            app.handle_key(key(KeyCode::Char('2'))).await.unwrap();
            assert_eq!(app.state.wizard.fields.role, Some(Role::Client));
            app.handle_key(key(KeyCode::Down)).await.unwrap();
            assert_eq!(app.state.wizard.fields.role, Some(Role::Both));
        }

        #[tokio::test]
        async fn test_feedback_fields_follow_focus() {
            let mut app = app_with(MockSubmissionClientTrait::new(), Route::Wizard);
            app.state.wizard = wizard_at(Step::Feedback);

            type_str(&mut app, "no-shows").await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Char('5'))).await.unwrap();
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Char('n'))).await.unwrap();
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            type_str(&mut app, "waitlists").await;

            let fields = &app.state.wizard.fields;
            assert_eq!(fields.current_challenges.value(), "no-shows");
            assert_eq!(fields.dynamic_booking_appeal, 5);
            assert_eq!(fields.revenue_sharing, Some(RevenueSharing::No));
            assert_eq!(fields.desired_features.value(), "waitlists");
        }

        #[tokio::test]
        async fn test_ctrl_chords_are_not_typed() {
            let mut app = app_with(MockSubmissionClientTrait::new(), Route::Wizard);
            app.handle_key(ctrl('a')).await.unwrap();
            assert!(app.state.wizard.fields.email.is_empty());
        }
    }

    mod final_submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_skip_and_submit_reaches_terminal() {
            let mut mock = MockSubmissionClientTrait::new();
            mock.expect_send()
                .withf(|s| matches!(s, Submission::Lead(p) if p.step_completed == 10))
                .times(1)
                .returning(|_| ok_receipt());
            let mut app = app_with(mock, Route::Wizard);
            app.state.wizard = wizard_at(Step::Role);

            app.handle_key(ctrl('s')).await.unwrap();
            assert!(app.submit_started.is_some());
            app.next_event().await.unwrap();

            assert_eq!(app.state.wizard.step(), Step::Confirmation);
            assert!(app.submit_started.is_none());
        }

        #[tokio::test]
        async fn test_failed_final_send_still_confirms() {
            let mut mock = MockSubmissionClientTrait::new();
            mock.expect_send().times(1).returning(|_| {
                Err(SubmissionError::Status {
                    status: 500,
                    body: String::new(),
                })
            });
            let mut app = app_with(mock, Route::Wizard);
            app.state.wizard = wizard_at(Step::Feedback);

            app.handle_key(ctrl('s')).await.unwrap();
            let event = app.next_event().await.unwrap();

            assert!(!event.succeeded);
            assert_eq!(app.state.wizard.step(), Step::Confirmation);
        }

        #[tokio::test]
        async fn test_skip_not_offered_before_mobile() {
            let mut mock = MockSubmissionClientTrait::new();
            mock.expect_send().times(0);
            let mut app = app_with(mock, Route::Wizard);
            app.state.wizard = wizard_at(Step::Results);

            app.handle_key(ctrl('s')).await.unwrap();
            assert!(!app.state.wizard.is_submitting);
            assert_eq!(app.state.wizard.step(), Step::Results);
        }

        #[tokio::test]
        async fn test_input_ignored_while_submitting() {
            let mut mock = MockSubmissionClientTrait::new();
            mock.expect_send().times(1).returning(|_| ok_receipt());
            let mut app = app_with(mock, Route::Wizard);
            app.state.wizard = wizard_at(Step::CurrentSystem);

            app.handle_key(ctrl('s')).await.unwrap();
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.wizard.step(), Step::CurrentSystem);
            app.next_event().await.unwrap();
        }

        #[tokio::test]
        async fn test_q_quits_from_confirmation() {
            let mut app = app_with(MockSubmissionClientTrait::new(), Route::Wizard);
            app.state.wizard = wizard_at(Step::Confirmation);

            app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_link_key_sets_status() {
            let mut app = app_with(MockSubmissionClientTrait::new(), Route::Wizard);
            app.state.wizard = wizard_at(Step::Confirmation);

            app.handle_key(key(KeyCode::Char('l'))).await.unwrap();
            let message = app.state.status_message.clone().unwrap();
            assert!(message.contains(SocialLink::LinkedIn.url()));
        }
    }

    mod register_interest {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_invalid_email_shows_error() {
            let mut mock = MockSubmissionClientTrait::new();
            mock.expect_send().times(0);
            let mut app = app_with(mock, Route::RegisterInterest);

            type_str(&mut app, "a@b").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(app.state.interest.email_error);

            app.handle_key(key(KeyCode::Backspace)).await.unwrap();
            assert!(!app.state.interest.email_error);
        }

        #[tokio::test]
        async fn test_submit_sends_interest_payload() {
            let mut mock = MockSubmissionClientTrait::new();
            mock.expect_send()
                .withf(|s| {
                    matches!(s, Submission::Interest(p)
                        if p.email == "jo@example.com" && p.source == "register-interest")
                })
                .times(1)
                .returning(|_| ok_receipt());
            let mut app = app_with(mock, Route::RegisterInterest);

            type_str(&mut app, "jo@example.com").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(app.state.interest.is_submitting);

            let event = app.next_event().await.unwrap();
            assert_eq!(event.purpose, SubmissionPurpose::Interest);
            assert!(app.state.interest.is_submitted);
        }

        #[tokio::test]
        async fn test_failed_interest_send_still_confirms() {
            let mut mock = MockSubmissionClientTrait::new();
            mock.expect_send().times(1).returning(|_| {
                Err(SubmissionError::Status {
                    status: 503,
                    body: String::new(),
                })
            });
            let mut app = app_with(mock, Route::RegisterInterest);

            type_str(&mut app, "jo@example.com").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            app.next_event().await.unwrap();
            assert!(app.state.interest.is_submitted);
        }

        #[tokio::test]
        async fn test_scroll_is_clamped_to_landing_copy() {
            let mut app = app_with(MockSubmissionClientTrait::new(), Route::RegisterInterest);

            app.handle_key(key(KeyCode::Up)).await.unwrap();
            assert_eq!(app.state.interest.scroll, 0);

            for _ in 0..20 {
                app.handle_key(key(KeyCode::PageDown)).await.unwrap();
            }
            assert_eq!(
                app.state.interest.scroll,
                crate::ui::register_interest::max_scroll()
            );
        }
    }

    #[test]
    fn test_social_link_keys() {
        assert_eq!(SocialLink::from_key('i'), Some(SocialLink::Instagram));
        assert_eq!(SocialLink::from_key('L'), Some(SocialLink::LinkedIn));
        assert_eq!(SocialLink::from_key('x'), None);
    }
}
