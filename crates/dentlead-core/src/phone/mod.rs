pub mod rule;
pub mod validator;

pub use rule::{max_digits_for, rule_for, PhoneRule, DEFAULT_RULE, PHONE_RULES};
pub use validator::{digits_only, validate, PhoneErrorKind, ValidationVerdict};
