use thiserror::Error;

use crate::phone::PhoneErrorKind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown dial code: {0}")]
    UnknownDialCode(String),
    #[error("invalid phone number ({})", .0.translation_key())]
    InvalidPhone(PhoneErrorKind),
}
