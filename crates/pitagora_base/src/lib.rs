//! Pythagorean numerology computed from a full name and a birth date.
//!
//! This crate provides:
//! - Digit reduction with master (11, 22, 33, 44) and karmic (13, 14, 16, 19)
//!   detection
//! - Name numbers: inner vibration, soul, personality, mission
//! - Existential planes from the letters of a name
//! - Date numbers: talent, karma, past lives, life path, divine gift
//! - The diamond of realizations and challenges
//!
//! Every function is pure and synchronous; the lookup tables are constants.

pub mod date;
pub mod diamond;
pub mod error;
pub mod letter;
pub mod name;
pub mod planes;
pub mod reading;
pub mod reduce;

pub use date::{BirthDate, DateNumbers, analyze_date, date_numbers};
pub use diamond::{Challenges, Diamond, Realizations, calculate_diamond, diamond, diamond_bases};
pub use error::NumerologyError;
pub use letter::{LETTER_VALUES, VOWELS, is_vowel, letter_value, normalize_name};
pub use name::{LetterSums, NameNumbers, letter_sums, name_numbers};
pub use planes::{ALL_PLANES, ExistentialPlanes, Plane, existential_planes};
pub use reading::{NumerologyResult, compute_numerology, compute_reading};
pub use reduce::{
    KARMIC_NUMBERS, MASTER_NUMBERS, NumerologyNumber, SpecialKind, SpecialNumber, digit_root,
    reduce_number, sum_digits,
};
