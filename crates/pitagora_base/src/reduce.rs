//! Digit reduction with master and karmic number detection.
//!
//! Every derived number in a reading passes through [`reduce_number`]: the
//! base-10 digits of a sum are added repeatedly until one digit remains.
//! Before each summing step the current value is checked against the master
//! (11, 22, 33, 44) and karmic (13, 14, 16, 19) sets; the first hit stops the
//! search and is recorded as a `"<intermediate>/<reduced>"` annotation.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::NumerologyError;

/// Master numbers, kept as annotations instead of being silently collapsed.
pub const MASTER_NUMBERS: [u64; 4] = [11, 22, 33, 44];

/// Karmic numbers, annotated the same way as master numbers.
pub const KARMIC_NUMBERS: [u64; 4] = [13, 14, 16, 19];

/// Which special set an intermediate value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialKind {
    Master,
    Karmic,
}

impl SpecialKind {
    /// Classify a value, `None` when it is neither master nor karmic.
    pub fn of(value: u64) -> Option<Self> {
        if MASTER_NUMBERS.contains(&value) {
            Some(Self::Master)
        } else if KARMIC_NUMBERS.contains(&value) {
            Some(Self::Karmic)
        } else {
            None
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Master => "master",
            Self::Karmic => "karmic",
        }
    }
}

/// A master or karmic value met during reduction, with its single-digit root.
///
/// Displays and serializes as `"<value>/<reduced>"`, e.g. `"11/2"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpecialNumber {
    /// The intermediate value (one of the master or karmic numbers).
    pub value: u8,
    /// Single-digit reduction of `value`.
    pub reduced: u8,
}

impl SpecialNumber {
    /// Master or karmic classification of the intermediate value.
    pub fn kind(self) -> SpecialKind {
        if MASTER_NUMBERS.contains(&u64::from(self.value)) {
            SpecialKind::Master
        } else {
            SpecialKind::Karmic
        }
    }
}

impl Display for SpecialNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.value, self.reduced)
    }
}

impl FromStr for SpecialNumber {
    type Err = NumerologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NumerologyError::InvalidSpecial(s.to_string());
        let (value, reduced) = s.split_once('/').ok_or_else(invalid)?;
        let value: u64 = value.parse().map_err(|_| invalid())?;
        let reduced: u8 = reduced.parse().map_err(|_| invalid())?;
        if SpecialKind::of(value).is_none() || digit_root(value) != reduced {
            return Err(invalid());
        }
        Ok(Self {
            value: value as u8,
            reduced,
        })
    }
}

impl Serialize for SpecialNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SpecialNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The atomic result unit of every numerology calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumerologyNumber {
    /// Final single-digit value (1..=9, or 0 when the input was 0).
    pub reduced: u8,
    /// First master/karmic value met while reducing, if any.
    pub special: Option<SpecialNumber>,
}

impl NumerologyNumber {
    /// A number with no special annotation.
    pub const fn plain(reduced: u8) -> Self {
        Self {
            reduced,
            special: None,
        }
    }

    pub fn kind(&self) -> Option<SpecialKind> {
        self.special.map(SpecialNumber::kind)
    }

    pub fn is_master(&self) -> bool {
        self.kind() == Some(SpecialKind::Master)
    }

    pub fn is_karmic(&self) -> bool {
        self.kind() == Some(SpecialKind::Karmic)
    }
}

impl Display for NumerologyNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.special {
            Some(special) => write!(f, "{special}"),
            None => write!(f, "{}", self.reduced),
        }
    }
}

/// Sum of the base-10 digits of `n`.
pub fn sum_digits(mut n: u64) -> u64 {
    let mut total = 0;
    while n > 0 {
        total += n % 10;
        n /= 10;
    }
    total
}

/// Repeated digit sum down to a single digit, without special detection.
pub fn digit_root(mut n: u64) -> u8 {
    while n > 9 {
        n = sum_digits(n);
    }
    n as u8
}

/// Reduce an integer to a single digit, flagging master and karmic values.
///
/// Negative inputs are reduced by absolute value. A special value found
/// during reduction is itself reduced all the way down, so `19` yields
/// `{ reduced: 1, special: "19/1" }` and not the two-digit `10`.
pub fn reduce_number(n: i64) -> NumerologyNumber {
    let mut sum = n.unsigned_abs();
    while sum > 9 {
        if SpecialKind::of(sum).is_some() {
            let reduced = digit_root(sum_digits(sum));
            return NumerologyNumber {
                reduced,
                special: Some(SpecialNumber {
                    value: sum as u8,
                    reduced,
                }),
            };
        }
        sum = sum_digits(sum);
    }
    NumerologyNumber::plain(sum as u8)
}
