//! Pythagorean letter table and name normalization.
//!
//! The 26 Latin letters are laid out in rows of nine and numbered by column:
//!
//! ```text
//!   1 2 3 4 5 6 7 8 9
//!   A B C D E F G H I
//!   J K L M N O P Q R
//!   S T U V W X Y Z
//! ```
//!
//! Accented letters are folded to their base letter by canonical
//! decomposition (NFD) followed by removal of combining marks, so `á`, `ñ`
//! and `ü` map like `a`, `n` and `u`.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Digit for each letter `A..=Z`, indexed by `letter - 'A'`.
pub const LETTER_VALUES: [u8; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, // A-I
    1, 2, 3, 4, 5, 6, 7, 8, 9, // J-R
    1, 2, 3, 4, 5, 6, 7, 8, // S-Z
];

/// The vowels counted for the soul number.
pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Pythagorean digit of an upper-case ASCII letter, `None` for anything else.
pub fn letter_value(c: char) -> Option<u8> {
    if c.is_ascii_uppercase() {
        Some(LETTER_VALUES[(c as u8 - b'A') as usize])
    } else {
        None
    }
}

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Strip diacritics and upper-case a name.
///
/// Characters without a decomposition (digits, punctuation, non-Latin
/// scripts) pass through and are skipped later by [`letter_value`].
pub fn normalize_name(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_uppercase)
        .collect()
}
