//! Composite mobile number value (country code + number)

use super::field::{InputField, InputKind};

/// Supported dialling codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountryCode {
    #[default]
    Australia,
    UnitedKingdom,
    UnitedStates,
}

impl CountryCode {
    pub const ALL: [CountryCode; 3] = [
        CountryCode::Australia,
        CountryCode::UnitedKingdom,
        CountryCode::UnitedStates,
    ];

    pub fn dial_code(self) -> &'static str {
        match self {
            Self::Australia => "+61",
            Self::UnitedKingdom => "+44",
            Self::UnitedStates => "+1",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Australia => "Australia",
            Self::UnitedKingdom => "United Kingdom",
            Self::UnitedStates => "United States",
        }
    }

    /// Short region tag shown in place of a flag glyph
    pub fn region(self) -> &'static str {
        match self {
            Self::Australia => "AU",
            Self::UnitedKingdom => "GB",
            Self::UnitedStates => "US",
        }
    }

    pub fn from_dial_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.dial_code() == code.trim())
    }

    pub fn next(self) -> Self {
        match self {
            Self::Australia => Self::UnitedKingdom,
            Self::UnitedKingdom => Self::UnitedStates,
            Self::UnitedStates => Self::Australia,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Australia => Self::UnitedStates,
            Self::UnitedKingdom => Self::Australia,
            Self::UnitedStates => Self::UnitedKingdom,
        }
    }
}

/// Mobile number as entered: selected country plus free-text digits
#[derive(Debug, Clone)]
pub struct MobileNumber {
    pub country_code: CountryCode,
    pub phone_number: InputField,
}

impl MobileNumber {
    pub fn new(country_code: CountryCode) -> Self {
        Self {
            country_code,
            phone_number: InputField::new("Mobile", "0412 345 678", InputKind::Phone),
        }
    }

    /// `"+61 0412 345 678"`, or `None` while no number has been typed
    pub fn formatted(&self) -> Option<String> {
        self.phone_number
            .non_empty()
            .map(|number| format!("{} {}", self.country_code.dial_code(), number))
    }
}

/// Edits the phone control understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneEdit {
    NextCountry,
    PrevCountry,
    Push(char),
    Pop,
}

impl MobileNumber {
    /// Apply an edit and emit the whole new value, or `None` if nothing changed.
    /// The control never validates; the wizard owns that.
    pub fn apply(&self, edit: PhoneEdit) -> Option<MobileNumber> {
        let mut next = self.clone();
        let changed = match edit {
            PhoneEdit::NextCountry => {
                next.country_code = self.country_code.next();
                true
            }
            PhoneEdit::PrevCountry => {
                next.country_code = self.country_code.prev();
                true
            }
            PhoneEdit::Push(c) => next.phone_number.push_char(c),
            PhoneEdit::Pop => next.phone_number.pop_char(),
        };
        changed.then_some(next)
    }
}

impl Default for MobileNumber {
    fn default() -> Self {
        Self::new(CountryCode::default())
    }
}
