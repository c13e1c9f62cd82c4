//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce the registry's invariants (positive identifiers,
//! bounded weights and battery levels, restricted medication alphabets) so
//! that once a value reaches the domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided string is longer than allowed.
    #[error("value must be at most {max} characters long")]
    TooLong { max: usize },
    /// Provided number is outside of the accepted range.
    #[error("value {value} must be between {min} and {max}")]
    OutOfRange { value: i32, min: i32, max: i32 },
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(DroneId, "Unique identifier for a registered drone.");
id_newtype!(MedicationId, "Unique identifier for a medication item.");

/// Macro to generate integer newtypes confined to an inclusive range.
macro_rules! bounded_int_newtype {
    ($name:ident, $min:expr, $max:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(i32);

        impl $name {
            pub const MIN: i32 = $min;
            pub const MAX: i32 = $max;

            /// Wraps the value after checking it lies within the accepted range.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if (Self::MIN..=Self::MAX).contains(&value) {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::OutOfRange {
                        value,
                        min: Self::MIN,
                        max: Self::MAX,
                    })
                }
            }

            /// Returns the raw `i32`.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

bounded_int_newtype!(
    WeightLimit,
    1,
    1000,
    "Maximum payload a drone is registered for, in grams."
);
bounded_int_newtype!(BatteryLevel, 0, 100, "Battery charge in percent.");
bounded_int_newtype!(
    MedicationWeight,
    1,
    i32::MAX,
    "Weight of a medication item, in grams."
);

impl BatteryLevel {
    /// A fully charged battery.
    pub const FULL: BatteryLevel = BatteryLevel(100);

    /// Drains the battery by `amount` percent without going below zero.
    #[must_use]
    pub fn drain(self, amount: i32) -> Self {
        Self((self.0 - amount).max(0))
    }
}

impl Default for BatteryLevel {
    fn default() -> Self {
        Self::FULL
    }
}

/// Trims the value and rejects empty input.
fn non_empty(value: impl Into<String>) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    Ok(trimmed)
}

/// Rejects empty input and any character outside `allowed`, whitespace
/// included. The value is kept exactly as given.
fn restricted(
    value: impl Into<String>,
    allowed: impl Fn(char) -> bool,
) -> Result<String, TypeConstraintError> {
    let value = value.into();
    if value.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    if !value.chars().all(allowed) {
        return Err(TypeConstraintError::InvalidValue(value));
    }
    Ok(value)
}

macro_rules! string_newtype_impls {
    ($name:ident) => {
        impl $name {
            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

/// Manufacturer serial number, trimmed and at most 100 characters.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SerialNumber(String);

impl SerialNumber {
    pub const MAX_LEN: usize = 100;

    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = non_empty(value)?;
        if value.chars().count() > Self::MAX_LEN {
            return Err(TypeConstraintError::TooLong { max: Self::MAX_LEN });
        }
        Ok(Self(value))
    }
}

string_newtype_impls!(SerialNumber);

/// Medication name made of letters, digits, `-` and `_`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MedicationName(String);

impl MedicationName {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        restricted(value, |c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            .map(Self)
            .map_err(|err| match err {
                TypeConstraintError::InvalidValue(value) => TypeConstraintError::InvalidValue(
                    format!("medication name '{value}' may only contain letters, numbers, '-' and '_'"),
                ),
                other => other,
            })
    }
}

string_newtype_impls!(MedicationName);

/// Medication code made of upper case letters, digits and `_`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MedicationCode(String);

impl MedicationCode {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        restricted(value, |c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
            .map(Self)
            .map_err(|err| match err {
                TypeConstraintError::InvalidValue(value) => TypeConstraintError::InvalidValue(
                    format!("medication code '{value}' may only contain upper case letters, numbers and '_'"),
                ),
                other => other,
            })
    }
}

string_newtype_impls!(MedicationCode);
