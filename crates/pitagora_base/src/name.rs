//! Name numbers: inner vibration, soul, personality and mission.

use serde::{Deserialize, Serialize};

use crate::letter::{is_vowel, letter_value, normalize_name};
use crate::reduce::{NumerologyNumber, reduce_number};

/// Numbers derived from a full name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameNumbers {
    /// Reduction of all letter digits.
    pub vibracion_interna: NumerologyNumber,
    /// Reduction of vowel digits.
    pub alma: NumerologyNumber,
    /// Reduction of consonant digits.
    pub personalidad: NumerologyNumber,
    /// Reduction of `alma.reduced + personalidad.reduced`.
    pub mision: NumerologyNumber,
    /// Unreduced digit of every mapped letter, in name order.
    pub raw_numbers: Vec<u8>,
}

/// Letter-digit sums of a normalized name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterSums {
    pub vowels: u64,
    pub consonants: u64,
}

impl LetterSums {
    pub fn total(self) -> u64 {
        self.vowels + self.consonants
    }
}

/// Walk a name and collect its letter sums and raw digits.
pub fn letter_sums(full_name: &str) -> (LetterSums, Vec<u8>) {
    let normalized = normalize_name(full_name);
    let mut sums = LetterSums::default();
    let mut raw = Vec::with_capacity(normalized.len());

    for c in normalized.chars() {
        let Some(digit) = letter_value(c) else {
            continue;
        };
        raw.push(digit);
        if is_vowel(c) {
            sums.vowels += u64::from(digit);
        } else {
            sums.consonants += u64::from(digit);
        }
    }

    (sums, raw)
}

/// Compute the four name numbers.
pub fn name_numbers(full_name: &str) -> NameNumbers {
    let (sums, raw_numbers) = letter_sums(full_name);

    let vibracion_interna = reduce_sum(sums.total());
    let alma = reduce_sum(sums.vowels);
    let personalidad = reduce_sum(sums.consonants);
    let mision = reduce_number(i64::from(alma.reduced) + i64::from(personalidad.reduced));

    NameNumbers {
        vibracion_interna,
        alma,
        personalidad,
        mision,
        raw_numbers,
    }
}

fn reduce_sum(sum: u64) -> NumerologyNumber {
    reduce_number(i64::try_from(sum).unwrap_or(i64::MAX))
}
