//! Answers collected by the wizard

use super::field::{InputField, InputKind};
use super::phone::{CountryCode, MobileNumber};
use super::validation::{parse_number, parse_positive};
use crate::revenue::{self, Projection};

/// Dollar increase on top of the current price
pub const PRICE_INCREASE_MIN: u32 = 0;
/// Slider cap while the price is unset or below it; otherwise the price itself
pub const PRICE_INCREASE_MAX: u32 = 100;
pub const DEFAULT_PRICE_INCREASE: u32 = 10;

pub const RETENTION_MIN: u32 = 70;
pub const RETENTION_MAX: u32 = 100;

pub const APPEAL_MIN: u8 = 1;
pub const APPEAL_MAX: u8 = 5;
pub const DEFAULT_APPEAL: u8 = 3;

/// Which side of the marketplace the visitor is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    ServiceProvider,
    Client,
    Both,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::ServiceProvider, Role::Client, Role::Both];

    pub fn label(self) -> &'static str {
        match self {
            Self::ServiceProvider => "Service Provider",
            Self::Client => "Client",
            Self::Both => "Both",
        }
    }

    /// Step through the options, starting from "no choice yet"
    pub fn cycle(current: Option<Role>, forward: bool) -> Role {
        let idx = current.and_then(|r| Self::ALL.iter().position(|x| *x == r));
        let len = Self::ALL.len();
        let next = match (idx, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        Self::ALL[next]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevenueSharing {
    Yes,
    No,
}

impl RevenueSharing {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    pub fn toggle(current: Option<RevenueSharing>) -> RevenueSharing {
        match current {
            Some(Self::Yes) => Self::No,
            _ => Self::Yes,
        }
    }
}

/// Focus within the multi-question feedback step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackFocus {
    #[default]
    Challenges,
    Appeal,
    RevenueSharing,
    DesiredFeatures,
}

impl FeedbackFocus {
    pub fn next(self) -> Self {
        match self {
            Self::Challenges => Self::Appeal,
            Self::Appeal => Self::RevenueSharing,
            Self::RevenueSharing => Self::DesiredFeatures,
            Self::DesiredFeatures => Self::Challenges,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Challenges => Self::DesiredFeatures,
            Self::Appeal => Self::Challenges,
            Self::RevenueSharing => Self::Appeal,
            Self::DesiredFeatures => Self::RevenueSharing,
        }
    }
}

/// Inline error flags for the validated fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub email: bool,
    pub phone: bool,
    pub price: bool,
    pub volume: bool,
}

impl FieldErrors {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Every answer the wizard collects
#[derive(Debug, Clone)]
pub struct FormFields {
    pub email: InputField,
    pub current_price: InputField,
    pub weekly_volume: InputField,
    pub price_increase: u32,
    pub retention: u32,
    pub mobile: MobileNumber,
    pub role: Option<Role>,
    pub current_system: InputField,
    pub current_challenges: InputField,
    pub dynamic_booking_appeal: u8,
    pub revenue_sharing: Option<RevenueSharing>,
    pub desired_features: InputField,
}

impl FormFields {
    pub fn new(country_code: CountryCode) -> Self {
        let mut fields = Self {
            email: InputField::new("Email", "your.email@example.com", InputKind::Email),
            current_price: InputField::new("Price per booking ($)", "50", InputKind::Decimal),
            weekly_volume: InputField::new("Bookings per week", "50", InputKind::Integer),
            price_increase: DEFAULT_PRICE_INCREASE,
            retention: 0,
            mobile: MobileNumber::new(country_code),
            role: None,
            current_system: InputField::text("Current booking method", "Your current booking method"),
            current_challenges: InputField::text("Challenges", "Describe your challenges"),
            dynamic_booking_appeal: DEFAULT_APPEAL,
            revenue_sharing: None,
            desired_features: InputField::text("Desired features", "Your suggestions"),
        };
        fields.apply_predicted_retention();
        fields
    }

    pub fn price(&self) -> Option<f64> {
        parse_positive(self.current_price.value())
    }

    pub fn volume(&self) -> Option<f64> {
        parse_positive(self.weekly_volume.value())
    }

    /// Raw numeric value, even if not positive; used for the payload
    pub fn price_number(&self) -> Option<f64> {
        parse_number(self.current_price.value())
    }

    /// Recomputed from the current answers on every call
    pub fn projection(&self) -> Projection {
        Projection::compute(
            self.price(),
            self.volume(),
            self.price_increase as f64,
            self.retention as f64,
        )
    }

    /// Replace the retention with the heuristic suggestion for the current increase
    pub fn apply_predicted_retention(&mut self) {
        let predicted = revenue::predicted_retention(self.price_increase as f64, self.price());
        self.retention = (predicted.round() as u32).clamp(RETENTION_MIN, RETENTION_MAX);
    }

    /// Upper bound of the price increase slider, doubling the price at most
    pub fn price_increase_max(&self) -> u32 {
        self.price()
            .map(|price| price.ceil() as u32)
            .unwrap_or(0)
            .max(PRICE_INCREASE_MAX)
    }

    /// Price after the dollar increase, when a price has been entered
    pub fn peak_price(&self) -> Option<f64> {
        self.price().map(|price| price + self.price_increase as f64)
    }

    /// Move the price increase slider, re-suggesting retention when it moves
    pub fn adjust_price_increase(&mut self, delta: i64) -> bool {
        let next = (self.price_increase as i64 + delta)
            .clamp(PRICE_INCREASE_MIN as i64, self.price_increase_max() as i64) as u32;
        if next == self.price_increase {
            return false;
        }
        self.price_increase = next;
        self.apply_predicted_retention();
        true
    }

    pub fn adjust_retention(&mut self, delta: i64) -> bool {
        let next = (self.retention as i64 + delta)
            .clamp(RETENTION_MIN as i64, RETENTION_MAX as i64) as u32;
        let changed = next != self.retention;
        self.retention = next;
        changed
    }

    pub fn adjust_appeal(&mut self, delta: i8) {
        self.dynamic_booking_appeal = self
            .dynamic_booking_appeal
            .saturating_add_signed(delta)
            .clamp(APPEAL_MIN, APPEAL_MAX);
    }

    pub fn set_appeal(&mut self, value: u8) {
        if (APPEAL_MIN..=APPEAL_MAX).contains(&value) {
            self.dynamic_booking_appeal = value;
        }
    }
}

impl Default for FormFields {
    fn default() -> Self {
        Self::new(CountryCode::default())
    }
}
