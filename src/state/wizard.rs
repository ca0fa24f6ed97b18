//! Step wizard state machine
//!
//! The wizard walks a fixed sequence of [`Step`]s. Validators gate forward
//! moves, a subset of completed steps triggers a progressive submission, and
//! the terminal confirmation step is only reachable through a submit.

use super::form_fields::{FeedbackFocus, FieldErrors, FormFields};
use super::phone::CountryCode;
use super::validation::{is_valid_email, is_valid_phone, parse_positive, ValidationError};

/// One screen of the wizard, numbered from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    Email = 1,
    CurrentPrice = 2,
    WeeklyVolume = 3,
    PriceIncrease = 4,
    Results = 5,
    Mobile = 6,
    Role = 7,
    CurrentSystem = 8,
    Feedback = 9,
    Confirmation = 10,
}

impl Step {
    pub const ALL: [Step; 10] = [
        Step::Email,
        Step::CurrentPrice,
        Step::WeeklyVolume,
        Step::PriceIncrease,
        Step::Results,
        Step::Mobile,
        Step::Role,
        Step::CurrentSystem,
        Step::Feedback,
        Step::Confirmation,
    ];

    pub const TOTAL: u8 = Self::ALL.len() as u8;
    pub const FIRST: Step = Step::Email;
    pub const FINAL_INPUT: Step = Step::Feedback;
    pub const TERMINAL: Step = Step::Confirmation;

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(n: u8) -> Option<Step> {
        n.checked_sub(1)
            .and_then(|i| Self::ALL.get(i as usize))
            .copied()
    }

    /// Following step, bounded at the terminal step
    pub fn following(self) -> Step {
        Self::from_number(self.number() + 1).unwrap_or(Self::TERMINAL)
    }

    /// Preceding step, floored at the first step
    pub fn preceding(self) -> Step {
        Self::from_number(self.number().saturating_sub(1)).unwrap_or(Self::FIRST)
    }

    pub fn is_terminal(self) -> bool {
        self == Self::TERMINAL
    }

    pub fn is_final_input(self) -> bool {
        self == Self::FINAL_INPUT
    }

    /// Completing these steps pushes a partial record upstream
    pub fn triggers_progressive(self) -> bool {
        matches!(
            self,
            Step::Email
                | Step::CurrentPrice
                | Step::WeeklyVolume
                | Step::PriceIncrease
                | Step::Results
                | Step::Mobile
                | Step::Role
                | Step::CurrentSystem
        )
    }

    /// Steps offering "skip and submit"
    pub fn allows_skip_submit(self) -> bool {
        matches!(self, Step::Mobile | Step::Role | Step::CurrentSystem)
    }

    pub fn progress_percent(self) -> u16 {
        (self.number() as u16 * 100) / Self::TOTAL as u16
    }
}

/// Outcome of a forward move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The step was completed and the wizard moved on
    Advanced { completed: Step, progressive: bool },
    /// Nothing to move to from here (final input or terminal step)
    Stayed,
}

/// Whole in-memory state of the wizard
#[derive(Debug, Clone)]
pub struct WizardState {
    step: Step,
    pub fields: FormFields,
    pub errors: FieldErrors,
    pub is_submitting: bool,
    pub feedback_focus: FeedbackFocus,
}

impl WizardState {
    pub fn new(country_code: CountryCode) -> Self {
        Self {
            step: Step::FIRST,
            fields: FormFields::new(country_code),
            errors: FieldErrors::default(),
            is_submitting: false,
            feedback_focus: FeedbackFocus::default(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Run the validator attached to `step`, if any
    pub fn validate(&self, step: Step) -> Result<(), ValidationError> {
        match step {
            Step::Email if !is_valid_email(self.fields.email.value()) => {
                Err(ValidationError::InvalidEmail)
            }
            Step::CurrentPrice if parse_positive(self.fields.current_price.value()).is_none() => {
                Err(ValidationError::InvalidPrice)
            }
            Step::WeeklyVolume if parse_positive(self.fields.weekly_volume.value()).is_none() => {
                Err(ValidationError::InvalidVolume)
            }
            Step::Mobile if !is_valid_phone(self.fields.mobile.phone_number.value()) => {
                Err(ValidationError::InvalidPhone)
            }
            _ => Ok(()),
        }
    }

    fn flag(&mut self, error: ValidationError) {
        match error {
            ValidationError::InvalidEmail => self.errors.email = true,
            ValidationError::InvalidPhone => self.errors.phone = true,
            ValidationError::InvalidPrice => self.errors.price = true,
            ValidationError::InvalidVolume => self.errors.volume = true,
        }
    }

    /// Move forward one step if the current step validates.
    ///
    /// On failure the matching error flag is raised and the step is kept.
    /// The final input step never advances here; it must be submitted.
    pub fn next(&mut self) -> Result<Transition, ValidationError> {
        let current = self.step;
        if current.is_terminal() || current.is_final_input() {
            return Ok(Transition::Stayed);
        }
        if let Err(error) = self.validate(current) {
            self.flag(error);
            return Err(error);
        }
        self.errors.clear();
        self.step = current.following();
        Ok(Transition::Advanced {
            completed: current,
            progressive: current.triggers_progressive(),
        })
    }

    /// Move back one step. No validation, never leaves the terminal step.
    pub fn prev(&mut self) -> bool {
        if self.step.is_terminal() || self.step == Step::FIRST {
            return false;
        }
        self.step = self.step.preceding();
        self.errors.clear();
        true
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting
            && (self.step.is_final_input() || self.step.allows_skip_submit())
    }

    /// Mark a final submission as in flight. Returns false when not allowed.
    pub fn begin_submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.is_submitting = true;
        true
    }

    /// The send finished (either way); show the confirmation screen
    pub fn finish_submit(&mut self) {
        self.is_submitting = false;
        self.errors.clear();
        self.step = Step::TERMINAL;
    }

    /// Re-run validators for flags that are currently raised, so a corrected
    /// value clears its error as the user types
    pub fn revalidate(&mut self) {
        if self.errors.email {
            self.errors.email = self.validate(Step::Email).is_err();
        }
        if self.errors.price {
            self.errors.price = self.validate(Step::CurrentPrice).is_err();
        }
        if self.errors.volume {
            self.errors.volume = self.validate(Step::WeeklyVolume).is_err();
        }
        if self.errors.phone {
            self.errors.phone = self.validate(Step::Mobile).is_err();
        }
    }

    /// Whether a progressive submission has an identifier to key on
    pub fn has_email(&self) -> bool {
        !self.fields.email.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn jump_to(&mut self, step: Step) {
        self.step = step;
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new(CountryCode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> WizardState {
        let mut wizard = WizardState::default();
        wizard.fields.email.set_value("jo@example.com");
        wizard.fields.current_price.set_value("50");
        wizard.fields.weekly_volume.set_value("50");
        wizard.fields.mobile.phone_number.set_value("0412 345 678");
        wizard
    }

    mod step {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_total_matches_variants() {
            assert_eq!(Step::TOTAL, 10);
            for (i, step) in Step::ALL.iter().enumerate() {
                assert_eq!(step.number() as usize, i + 1);
                assert_eq!(Step::from_number(step.number()), Some(*step));
            }
        }

        #[test]
        fn test_from_number_out_of_range() {
            assert_eq!(Step::from_number(0), None);
            assert_eq!(Step::from_number(11), None);
        }

        #[test]
        fn test_following_and_preceding_are_bounded() {
            assert_eq!(Step::Confirmation.following(), Step::Confirmation);
            assert_eq!(Step::Email.preceding(), Step::Email);
            assert_eq!(Step::Results.following(), Step::Mobile);
            assert_eq!(Step::Results.preceding(), Step::PriceIncrease);
        }

        #[test]
        fn test_progress_percent() {
            assert_eq!(Step::Email.progress_percent(), 10);
            assert_eq!(Step::Results.progress_percent(), 50);
            assert_eq!(Step::Confirmation.progress_percent(), 100);
        }

        #[test]
        fn test_progressive_set() {
            let progressive: Vec<u8> = Step::ALL
                .iter()
                .filter(|s| s.triggers_progressive())
                .map(|s| s.number())
                .collect();
            assert_eq!(progressive, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        }
    }

    mod next {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_invalid_email_blocks_and_flags() {
            let mut wizard = WizardState::default();
            wizard.fields.email.set_value("abc");
            assert_eq!(wizard.next(), Err(ValidationError::InvalidEmail));
            assert_eq!(wizard.step(), Step::Email);
            assert!(wizard.errors.email);
        }

        #[test]
        fn test_valid_email_advances_and_clears_flag() {
            let mut wizard = WizardState::default();
            wizard.fields.email.set_value("abc");
            let _ = wizard.next();
            wizard.fields.email.set_value("a@b.co");
            assert_eq!(
                wizard.next(),
                Ok(Transition::Advanced {
                    completed: Step::Email,
                    progressive: true,
                })
            );
            assert_eq!(wizard.step(), Step::CurrentPrice);
            assert!(!wizard.errors.email);
        }

        #[test]
        fn test_price_and_volume_must_be_positive() {
            let mut wizard = filled();
            wizard.jump_to(Step::CurrentPrice);
            wizard.fields.current_price.set_value("0");
            assert_eq!(wizard.next(), Err(ValidationError::InvalidPrice));
            assert!(wizard.errors.price);

            wizard.jump_to(Step::WeeklyVolume);
            wizard.fields.weekly_volume.set_value("");
            assert_eq!(wizard.next(), Err(ValidationError::InvalidVolume));
            assert_eq!(wizard.step(), Step::WeeklyVolume);
            assert!(wizard.errors.volume);
        }

        #[test]
        fn test_phone_needs_eight_digits() {
            let mut wizard = filled();
            wizard.jump_to(Step::Mobile);
            wizard.fields.mobile.phone_number.set_value("123");
            assert_eq!(wizard.next(), Err(ValidationError::InvalidPhone));
            assert!(wizard.errors.phone);

            wizard.fields.mobile.phone_number.set_value("0412 345 678");
            assert!(matches!(wizard.next(), Ok(Transition::Advanced { .. })));
            assert_eq!(wizard.step(), Step::Role);
        }

        #[test]
        fn test_next_never_reaches_terminal() {
            let mut wizard = filled();
            for _ in 0..20 {
                let _ = wizard.next();
            }
            assert_eq!(wizard.step(), Step::Feedback);
            assert_eq!(wizard.next(), Ok(Transition::Stayed));
        }

        #[test]
        fn test_next_on_terminal_stays() {
            let mut wizard = filled();
            wizard.jump_to(Step::Confirmation);
            assert_eq!(wizard.next(), Ok(Transition::Stayed));
            assert_eq!(wizard.step(), Step::Confirmation);
        }
    }

    mod prev {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_prev_is_floored() {
            let mut wizard = WizardState::default();
            assert!(!wizard.prev());
            assert_eq!(wizard.step(), Step::Email);
        }

        #[test]
        fn test_prev_skips_validation() {
            let mut wizard = filled();
            wizard.jump_to(Step::WeeklyVolume);
            wizard.fields.weekly_volume.set_value("");
            assert!(wizard.prev());
            assert_eq!(wizard.step(), Step::CurrentPrice);
        }

        #[test]
        fn test_prev_not_from_terminal() {
            let mut wizard = filled();
            wizard.jump_to(Step::Confirmation);
            assert!(!wizard.prev());
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_submit_only_from_allowed_steps() {
            let mut wizard = filled();
            for step in Step::ALL {
                wizard.jump_to(step);
                let expected = matches!(
                    step,
                    Step::Mobile | Step::Role | Step::CurrentSystem | Step::Feedback
                );
                assert_eq!(wizard.can_submit(), expected, "{step:?}");
            }
        }

        #[test]
        fn test_begin_submit_once() {
            let mut wizard = filled();
            wizard.jump_to(Step::Feedback);
            assert!(wizard.begin_submit());
            assert!(wizard.is_submitting);
            assert!(!wizard.begin_submit());
        }

        #[test]
        fn test_finish_submit_goes_terminal() {
            let mut wizard = filled();
            wizard.jump_to(Step::Role);
            wizard.begin_submit();
            wizard.finish_submit();
            assert_eq!(wizard.step(), Step::Confirmation);
            assert!(!wizard.is_submitting);
        }
    }

    #[test]
    fn test_revalidate_clears_corrected_flag() {
        let mut wizard = WizardState::default();
        wizard.fields.email.set_value("nope");
        let _ = wizard.next();
        assert!(wizard.errors.email);

        wizard.fields.email.set_value("still@nope");
        wizard.revalidate();
        assert!(wizard.errors.email);

        wizard.fields.email.set_value("ok@example.com");
        wizard.revalidate();
        assert!(!wizard.errors.email);
    }

    #[test]
    fn test_revalidate_does_not_raise_new_flags() {
        let mut wizard = WizardState::default();
        wizard.revalidate();
        assert_eq!(wizard.errors, FieldErrors::default());
    }
}
