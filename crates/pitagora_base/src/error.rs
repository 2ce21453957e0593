//! Error types for numerology calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from numerology calculations.
///
/// The arithmetic itself cannot fail; only turning a date string into
/// numeric fields can.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NumerologyError {
    /// Date string is not made of three `-`-separated segments.
    InvalidDateFormat(String),
    /// A date segment is not a non-negative integer.
    InvalidDateField {
        /// Which segment failed: `"year"`, `"month"` or `"day"`.
        field: &'static str,
        /// The offending text.
        value: String,
    },
    /// Text is not a `"<intermediate>/<reduced>"` master or karmic annotation.
    InvalidSpecial(String),
}

impl Display for NumerologyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateFormat(s) => write!(f, "expected YYYY-MM-DD, got {s:?}"),
            Self::InvalidDateField { field, value } => {
                write!(f, "invalid {field} in date: {value:?}")
            }
            Self::InvalidSpecial(s) => write!(f, "invalid special number: {s:?}"),
        }
    }
}

impl Error for NumerologyError {}
