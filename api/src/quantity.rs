//! Parsing and JSON encoding shared by the unsigned on-chain quantities.

use num_bigint::BigUint;
use thiserror::Error;

/// An error that can occur when parsing a string into a chain quantity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseQuantityError {
    /// The string (or the digits after a `0x` prefix) is empty.
    #[error("empty quantity")]
    Empty,
    /// The string contains a character that is not a digit in its radix.
    #[error("invalid digit in quantity: {0:?}")]
    InvalidDigit(String),
}

/// Parses an unsigned quantity from either a decimal string (`"17034812"`)
/// or a JSON-RPC style hex string (`"0x103ee3c"`).
///
/// Surrounding whitespace is ignored. Signs, separators and fractional
/// parts are rejected.
pub fn parse_quantity(s: &str) -> Result<BigUint, ParseQuantityError> {
    let s = s.trim();
    let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (s, 10),
    };

    if digits.is_empty() {
        return Err(ParseQuantityError::Empty);
    }
    // from_str_radix tolerates '_' separators and a leading '+', we don't.
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(ParseQuantityError::InvalidDigit(s.to_string()));
    }

    BigUint::parse_bytes(digits.as_bytes(), radix)
        .ok_or_else(|| ParseQuantityError::InvalidDigit(s.to_string()))
}

/// Implements `FromStr`, `Display` and string-based serde for a `BigUint` newtype.
///
/// Quantities travel as decimal strings so JSON consumers never round them
/// through a float.
macro_rules! biguint_quantity {
    ($name:ident) => {
        impl std::str::FromStr for $name {
            type Err = $crate::quantity::ParseQuantityError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $crate::quantity::parse_quantity(s).map(Self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use biguint_quantity;
