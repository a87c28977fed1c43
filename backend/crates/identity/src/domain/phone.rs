//! Phone Number Value Object
//!
//! The phone number doubles as the login name. Anything that is not a
//! digit is stripped before validation, so "911-222-333" and "911222333"
//! are the same account.

use std::fmt;
use thiserror::Error;

/// Minimum digits after stripping separators
pub const MIN_PHONE_DIGITS: usize = 9;

/// Maximum digits after stripping separators
pub const MAX_PHONE_DIGITS: usize = 15;

/// Phone validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneError {
    #[error("Telefone inválido")]
    InvalidLength { digits: usize },
}

/// Canonical phone number (digits only)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Parse and canonicalize a raw phone string
    pub fn new(raw: &str) -> Result<Self, PhoneError> {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.len() < MIN_PHONE_DIGITS || digits.len() > MAX_PHONE_DIGITS {
            return Err(PhoneError::InvalidLength {
                digits: digits.len(),
            });
        }

        Ok(Self(digits))
    }

    /// Canonical digit string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
