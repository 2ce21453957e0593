//! The numerology diamond: four realizations (pinnacles) and four challenges.
//!
//! Three base values come from the birth date, each already reduced:
//! `A` (month), `B` (day) and `C` (year digit sum). Realizations are built
//! from sums of the bases and challenges from absolute differences:
//!
//! ```text
//!   r1 = A + B        d1    = |A - B|
//!   r2 = B + C        d2    = |B - C|
//!   r3 = r1 + r2      mayor = |d1 - d2|
//!   r4 = A + C        extra = |A - C|
//! ```
//!
//! Every entry goes through [`reduce_number`] and can carry its own
//! master/karmic annotation.

use serde::{Deserialize, Serialize};

use crate::date::BirthDate;
use crate::error::NumerologyError;
use crate::reduce::{NumerologyNumber, reduce_number};

/// The four realization numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Realizations {
    pub r1: NumerologyNumber,
    pub r2: NumerologyNumber,
    pub r3: NumerologyNumber,
    pub r4: NumerologyNumber,
}

/// The four challenge numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenges {
    pub d1: NumerologyNumber,
    pub d2: NumerologyNumber,
    pub mayor: NumerologyNumber,
    pub extra: NumerologyNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diamond {
    pub realizaciones: Realizations,
    pub desafios: Challenges,
}

/// Reduced base values `(A, B, C)` of a date.
pub fn diamond_bases(date: &BirthDate) -> (u8, u8, u8) {
    let a = reduce_number(i64::from(date.month)).reduced;
    let b = reduce_number(i64::from(date.day)).reduced;
    let c = reduce_number(i64::from(date.year_digit_sum())).reduced;
    (a, b, c)
}

/// Compute the diamond of a birth date.
pub fn diamond(date: &BirthDate) -> Diamond {
    let (a, b, c) = diamond_bases(date);
    let (a, b, c) = (i64::from(a), i64::from(b), i64::from(c));

    let r1 = reduce_number(a + b);
    let r2 = reduce_number(b + c);
    let r3 = reduce_number(i64::from(r1.reduced) + i64::from(r2.reduced));
    let r4 = reduce_number(a + c);

    let d1 = reduce_number((a - b).abs());
    let d2 = reduce_number((b - c).abs());
    let mayor = reduce_number((i64::from(d1.reduced) - i64::from(d2.reduced)).abs());
    let extra = reduce_number((a - c).abs());

    Diamond {
        realizaciones: Realizations { r1, r2, r3, r4 },
        desafios: Challenges {
            d1,
            d2,
            mayor,
            extra,
        },
    }
}

/// Parse a `YYYY-MM-DD` string and compute its diamond.
pub fn calculate_diamond(date: &str) -> Result<Diamond, NumerologyError> {
    Ok(diamond(&date.parse()?))
}
