//! Core type definitions with validation.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Validation errors for individual report tokens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The token is not a plain run of ASCII digits.
    #[error("{field} must be a non-negative base-10 integer, got {value:?}")]
    NotANumber { field: &'static str, value: String },

    /// The token is all digits but does not fit in 64 bits.
    #[error("{field} is out of range: {value}")]
    OutOfRange { field: &'static str, value: String },

    /// The availability status was not `true` or `false`.
    #[error("invalid availability status: {value:?}")]
    InvalidStatus { value: String },
}

/// Parses a strictly unsigned base-10 token.
///
/// Unlike `u64::from_str`, a leading `+` is rejected.
pub fn parse_unsigned(field: &'static str, token: &str) -> Result<u64, ValidationError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NotANumber {
            field,
            value: token.to_string(),
        });
    }
    token.parse().map_err(|_| ValidationError::OutOfRange {
        field,
        value: token.to_string(),
    })
}

/// Generates a numeric ID newtype with common trait implementations.
macro_rules! define_numeric_id {
    (
        $(#[$meta:meta])*
        $name:ident, $field_name:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u64);

        impl $name {
            /// Wraps a raw numeric ID.
            #[must_use]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Returns the raw numeric value.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_unsigned($field_name, s).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_numeric_id!(
    /// Identifies a charging station.
    StationId, "station ID"
);

define_numeric_id!(
    /// Identifies a single charger.
    ///
    /// A charger belongs to exactly one station.
    ChargerId, "charger ID"
);

/// Availability reported for a charger over one span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Up,
    Down,
}

impl FromStr for Status {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true" => Ok(Self::Up),
            "false" => Ok(Self::Down),
            _ => Err(ValidationError::InvalidStatus {
                value: s.to_string(),
            }),
        }
    }
}
