use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldState {
    Unset,
    Valid,
    Invalid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Aadhaar,
    License,
}

/// The view-model for one validated field: what state to paint it in and the
/// inline message to show. An empty input resets the field to neutral.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FieldCheck {
    pub state: FieldState,
    pub message: String,
}

impl FieldCheck {
    pub fn aadhaar(value: &str) -> Self {
        let value = value.trim();

        if value.is_empty() {
            return Self::unset();
        }

        if value.len() == 12 && value.chars().all(|c| c.is_ascii_digit()) {
            return Self::valid("Valid Aadhaar number");
        }

        Self::invalid("Please enter a valid 12-digit Aadhaar number")
    }

    pub fn license(value: &str) -> Self {
        let value = value.trim();

        if value.is_empty() {
            return Self::unset();
        }

        if value.len() >= 5 {
            return Self::valid("Valid license number");
        }

        Self::invalid("License number must be at least 5 characters")
    }

    pub fn is_valid(&self) -> bool {
        self.state == FieldState::Valid
    }

    fn unset() -> Self {
        Self {
            state: FieldState::Unset,
            message: "".into(),
        }
    }

    fn valid(message: &str) -> Self {
        Self {
            state: FieldState::Valid,
            message: message.into(),
        }
    }

    fn invalid(message: &str) -> Self {
        Self {
            state: FieldState::Invalid,
            message: message.into(),
        }
    }
}

/// Both identity documents checked together, as the submission gate needs
/// them. Fields are independent; the only cross-field rule is that a
/// self-drive submission requires both to be valid.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DocumentReport {
    pub aadhaar: FieldCheck,
    pub license: FieldCheck,
}

impl DocumentReport {
    pub fn new(aadhaar_number: &str, license_number: &str) -> Self {
        Self {
            aadhaar: FieldCheck::aadhaar(aadhaar_number),
            license: FieldCheck::license(license_number),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.aadhaar.is_valid() && self.license.is_valid()
    }

    /// The field to focus on a rejected submission. Aadhaar comes first in
    /// the form, so it wins the tie.
    pub fn first_invalid(&self) -> Option<Field> {
        if !self.aadhaar.is_valid() {
            return Some(Field::Aadhaar);
        }

        if !self.license.is_valid() {
            return Some(Field::License);
        }

        None
    }
}

#[test]
fn aadhaar_accepts_exactly_twelve_digits() {
    let check = FieldCheck::aadhaar("123456789012");

    assert_eq!(check.state, FieldState::Valid);
    assert_eq!(check.message, "Valid Aadhaar number");
}

#[test]
fn aadhaar_rejects_short_and_non_numeric_input() {
    let short = FieldCheck::aadhaar("12345");
    assert_eq!(short.state, FieldState::Invalid);
    assert_eq!(short.message, "Please enter a valid 12-digit Aadhaar number");

    let lettered = FieldCheck::aadhaar("12345678901a");
    assert_eq!(lettered.state, FieldState::Invalid);
}

#[test]
fn empty_fields_reset_to_neutral() {
    let aadhaar = FieldCheck::aadhaar("   ");
    assert_eq!(aadhaar.state, FieldState::Unset);
    assert_eq!(aadhaar.message, "");
    assert!(!aadhaar.is_valid());

    let license = FieldCheck::license("");
    assert_eq!(license.state, FieldState::Unset);
    assert!(!license.is_valid());
}

#[test]
fn license_requires_five_characters_after_trimming() {
    assert_eq!(FieldCheck::license("AB123").state, FieldState::Valid);
    assert_eq!(FieldCheck::license(" AB123 ").state, FieldState::Valid);
    assert_eq!(FieldCheck::license("AB1").state, FieldState::Invalid);
    assert_eq!(FieldCheck::license("  AB1  ").state, FieldState::Invalid);
}

#[test]
fn first_invalid_field_prefers_aadhaar() {
    let both_bad = DocumentReport::new("12", "x");
    assert_eq!(both_bad.first_invalid(), Some(Field::Aadhaar));
    assert!(!both_bad.is_valid());

    let license_bad = DocumentReport::new("123456789012", "x");
    assert_eq!(license_bad.first_invalid(), Some(Field::License));

    let both_good = DocumentReport::new("123456789012", "AB123");
    assert_eq!(both_good.first_invalid(), None);
    assert!(both_good.is_valid());
}
