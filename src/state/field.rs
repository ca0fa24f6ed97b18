//! Text input value objects

/// What a text input accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Any printable character
    Text,
    /// Printable characters except whitespace
    Email,
    /// Digits and a single decimal point
    Decimal,
    /// Digits only
    Integer,
    /// Digits plus common phone formatting
    Phone,
}

impl InputKind {
    fn accepts(self, current: &str, c: char) -> bool {
        match self {
            InputKind::Text => !c.is_control(),
            InputKind::Email => !c.is_control() && !c.is_whitespace(),
            InputKind::Decimal => c.is_ascii_digit() || (c == '.' && !current.contains('.')),
            InputKind::Integer => c.is_ascii_digit(),
            InputKind::Phone => c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'),
        }
    }
}

/// Single-line text input with its label and placeholder
#[derive(Debug, Clone)]
pub struct InputField {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: InputKind,
    value: String,
}

impl InputField {
    pub fn new(label: &'static str, placeholder: &'static str, kind: InputKind) -> Self {
        Self {
            label,
            placeholder,
            kind,
            value: String::new(),
        }
    }

    pub fn text(label: &'static str, placeholder: &'static str) -> Self {
        Self::new(label, placeholder, InputKind::Text)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Trimmed value, `None` when blank
    pub fn non_empty(&self) -> Option<String> {
        let trimmed = self.value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character if the field kind accepts it. Returns whether it changed.
    pub fn push_char(&mut self, c: char) -> bool {
        if self.kind.accepts(&self.value, c) {
            self.value.push(c);
            true
        } else {
            false
        }
    }

    /// Remove the last character. Returns whether it changed.
    pub fn pop_char(&mut self) -> bool {
        self.value.pop().is_some()
    }
}
