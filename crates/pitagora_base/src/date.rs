//! Birth date parsing and date numbers: talent, karma, past lives, life path
//! and divine gift.
//!
//! Dates are taken at face value. Month 13 or day 31 of February are
//! computed like any other integers; only the `YYYY-MM-DD` shape and the
//! digits themselves are checked.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NumerologyError;
use crate::reduce::{NumerologyNumber, reduce_number, sum_digits};

/// A birth date split into its numeric fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl BirthDate {
    pub const fn new(year: u32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Sum of the digits of the year, e.g. 1990 -> 19.
    pub fn year_digit_sum(&self) -> u32 {
        sum_digits(u64::from(self.year)) as u32
    }

    /// Last two digits of the year, e.g. 1990 -> 90.
    pub const fn year_last_two(&self) -> u32 {
        self.year % 100
    }
}

impl FromStr for BirthDate {
    type Err = NumerologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('-').collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(NumerologyError::InvalidDateFormat(s.to_string()));
        };
        Ok(Self {
            year: parse_field("year", year)?,
            month: parse_field("month", month)?,
            day: parse_field("day", day)?,
        })
    }
}

impl Display for BirthDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

fn parse_field(field: &'static str, text: &str) -> Result<u32, NumerologyError> {
    let invalid = || NumerologyError::InvalidDateField {
        field,
        value: text.to_string(),
    };
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    text.parse().map_err(|_| invalid())
}

/// Numbers derived from a birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateNumbers {
    /// Reduction of the day.
    pub talento: NumerologyNumber,
    /// Reduction of the month.
    pub karma: NumerologyNumber,
    /// Reduction of the year digit sum.
    pub vidas_pasadas: NumerologyNumber,
    /// Reduction of talent + karma + past lives (already reduced).
    pub camino_de_vida: NumerologyNumber,
    /// Reduction of the two digits of the year's last two digits.
    pub regalo_divino: NumerologyNumber,
}

/// Compute the five date numbers.
pub fn date_numbers(date: &BirthDate) -> DateNumbers {
    let talento = reduce_number(i64::from(date.day));
    let karma = reduce_number(i64::from(date.month));
    let vidas_pasadas = reduce_number(i64::from(date.year_digit_sum()));
    let camino_de_vida = reduce_number(
        i64::from(talento.reduced) + i64::from(karma.reduced) + i64::from(vidas_pasadas.reduced),
    );
    let last_two = date.year_last_two();
    let regalo_divino = reduce_number(i64::from(last_two / 10 + last_two % 10));

    DateNumbers {
        talento,
        karma,
        vidas_pasadas,
        camino_de_vida,
        regalo_divino,
    }
}

/// Parse a `YYYY-MM-DD` string and compute its date numbers.
pub fn analyze_date(date: &str) -> Result<DateNumbers, NumerologyError> {
    Ok(date_numbers(&date.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain() {
        let d: BirthDate = "1990-05-24".parse().unwrap();
        assert_eq!(d, BirthDate::new(1990, 5, 24));
        assert_eq!(d.year_digit_sum(), 19);
        assert_eq!(d.year_last_two(), 90);
        assert_eq!(d.to_string(), "1990-05-24");
    }

    #[test]
    fn parse_keeps_impossible_calendar_dates() {
        let d: BirthDate = "2023-02-31".parse().unwrap();
        assert_eq!(d, BirthDate::new(2023, 2, 31));
        let d: BirthDate = "2001-13-00".parse().unwrap();
        assert_eq!(d.month, 13);
        assert_eq!(d.day, 0);
    }

    #[test]
    fn parse_rejects_bad_shape() {
        assert_eq!(
            "1990/05/24".parse::<BirthDate>(),
            Err(NumerologyError::InvalidDateFormat("1990/05/24".into()))
        );
        assert!("1990-05".parse::<BirthDate>().is_err());
        assert!("1990-05-24-01".parse::<BirthDate>().is_err());
    }

    #[test]
    fn parse_rejects_non_numeric_fields() {
        assert_eq!(
            "1990-ab-24".parse::<BirthDate>(),
            Err(NumerologyError::InvalidDateField {
                field: "month",
                value: "ab".into(),
            })
        );
        assert!("1990-+5-24".parse::<BirthDate>().is_err());
        assert!("1990--24".parse::<BirthDate>().is_err());
    }

    #[test]
    fn year_digit_sum_ignores_leading_zeros() {
        let d: BirthDate = "0990-01-01".parse().unwrap();
        assert_eq!(d.year, 990);
        assert_eq!(d.year_digit_sum(), 18);
    }

    #[test]
    fn date_numbers_1990_05_24() {
        let n = analyze_date("1990-05-24").unwrap();
        assert_eq!(n.talento, NumerologyNumber::plain(6));
        assert_eq!(n.karma, NumerologyNumber::plain(5));
        assert_eq!(n.vidas_pasadas, reduce_number(19));
        assert_eq!(n.vidas_pasadas.reduced, 1);
        // 6 + 5 + 1 = 12 -> 3
        assert_eq!(n.camino_de_vida, NumerologyNumber::plain(3));
        // 90 -> 9 + 0
        assert_eq!(n.regalo_divino, NumerologyNumber::plain(9));
    }

    #[test]
    fn karmic_day_and_master_month() {
        let n = analyze_date("2000-11-13").unwrap();
        assert_eq!(n.talento.to_string(), "13/4");
        assert_eq!(n.karma.to_string(), "11/2");
        assert_eq!(n.vidas_pasadas, NumerologyNumber::plain(2));
        // 4 + 2 + 2 = 8
        assert_eq!(n.camino_de_vida, NumerologyNumber::plain(8));
        // 00 -> 0
        assert_eq!(n.regalo_divino, NumerologyNumber::plain(0));
    }

    #[test]
    fn divine_gift_can_be_master() {
        // 29 -> 2 + 9 = 11
        let n = analyze_date("1929-01-01").unwrap();
        assert_eq!(n.regalo_divino.to_string(), "11/2");
    }

    #[test]
    fn life_path_uses_reduced_parts() {
        // day 29 -> "11/2", month 9, year 1985 -> 23 -> 5 ; 2 + 9 + 5 = 16
        let n = analyze_date("1985-09-29").unwrap();
        assert_eq!(n.talento.reduced, 2);
        assert_eq!(n.camino_de_vida.to_string(), "16/7");
    }
}
