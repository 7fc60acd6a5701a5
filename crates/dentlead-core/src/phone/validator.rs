use serde::Serialize;

use super::rule::rule_for;

/// Why a local number was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneErrorKind {
    None,
    Empty,
    ForbiddenPrefix,
    TooShort,
    TooLong,
}

impl PhoneErrorKind {
    /// Translation key for the inline message under the phone field.
    pub fn translation_key(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Empty => "phoneValidation.invalid",
            Self::ForbiddenPrefix => "phoneValidation.invalidPrefix",
            Self::TooShort => "phoneValidation.tooShort",
            Self::TooLong => "phoneValidation.tooLong",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationVerdict {
    pub valid: bool,
    pub error_kind: PhoneErrorKind,
}

impl ValidationVerdict {
    fn ok() -> Self {
        Self {
            valid: true,
            error_kind: PhoneErrorKind::None,
        }
    }

    fn rejected(error_kind: PhoneErrorKind) -> Self {
        Self {
            valid: false,
            error_kind,
        }
    }
}

pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Checks a local number (without the dial code) against the rule for
/// `dial_code`. Separators in `raw_local_number` are ignored.
pub fn validate(dial_code: &str, raw_local_number: &str) -> ValidationVerdict {
    let digits = digits_only(raw_local_number);
    if digits.is_empty() {
        return ValidationVerdict::rejected(PhoneErrorKind::Empty);
    }

    let rule = rule_for(dial_code);

    // Prefix first: "0532..." under +90 is a re-typed trunk code, not a length problem.
    if rule.forbidden_prefix_of(&digits).is_some() {
        return ValidationVerdict::rejected(PhoneErrorKind::ForbiddenPrefix);
    }

    let count = digits.len();
    if count < rule.min_digits {
        return ValidationVerdict::rejected(PhoneErrorKind::TooShort);
    }
    if count > rule.max_digits {
        return ValidationVerdict::rejected(PhoneErrorKind::TooLong);
    }

    ValidationVerdict::ok()
}
