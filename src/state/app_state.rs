//! Application state definitions

use super::interest::InterestState;
use super::phone::CountryCode;
use super::wizard::WizardState;

/// Top-level page shown by the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// The multi-step waitlist wizard
    #[default]
    Wizard,
    /// Standalone landing page with its own email capture
    RegisterInterest,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub route: Route,
    pub wizard: WizardState,
    pub interest: InterestState,
    /// One-line feedback in the status bar (e.g. "Link copied")
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(route: Route, country_code: CountryCode) -> Self {
        Self {
            route,
            wizard: WizardState::new(country_code),
            interest: InterestState::new(),
            status_message: None,
        }
    }

    /// Whether a send is in flight on the active page
    pub fn is_submitting(&self) -> bool {
        match self.route {
            Route::Wizard => self.wizard.is_submitting,
            Route::RegisterInterest => self.interest.is_submitting,
        }
    }
}
