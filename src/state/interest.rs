//! Register-interest page state

use super::field::{InputField, InputKind};
use super::validation::{is_valid_email, ValidationError};

#[derive(Debug, Clone)]
pub struct InterestState {
    pub email: InputField,
    pub email_error: bool,
    pub is_submitting: bool,
    pub is_submitted: bool,
    /// First visible line of the landing copy
    pub scroll: u16,
}

impl InterestState {
    pub fn new() -> Self {
        Self {
            email: InputField::new("Email", "your.email@example.com", InputKind::Email),
            email_error: false,
            is_submitting: false,
            is_submitted: false,
            scroll: 0,
        }
    }

    /// Typing always clears a raised error
    pub fn input_char(&mut self, c: char) {
        if self.email.push_char(c) {
            self.email_error = false;
        }
    }

    pub fn backspace(&mut self) {
        if self.email.pop_char() {
            self.email_error = false;
        }
    }

    /// Validate and mark the send as in flight
    pub fn begin_submit(&mut self) -> Result<bool, ValidationError> {
        if self.is_submitting || self.is_submitted {
            return Ok(false);
        }
        if !is_valid_email(self.email.value()) {
            self.email_error = true;
            return Err(ValidationError::InvalidEmail);
        }
        self.email_error = false;
        self.is_submitting = true;
        Ok(true)
    }

    /// The send finished, successfully or not
    pub fn finish_submit(&mut self) {
        self.is_submitting = false;
        self.is_submitted = true;
    }

    pub fn scroll_by(&mut self, delta: i32, max: u16) {
        self.scroll = (self.scroll as i32 + delta).clamp(0, max as i32) as u16;
    }
}

impl Default for InterestState {
    fn default() -> Self {
        Self::new()
    }
}
