//! Existential planes: letter digits grouped into four buckets.
//!
//! | Plane     | Digits  |
//! |-----------|---------|
//! | Mental    | 1, 8    |
//! | Physical  | 4, 5    |
//! | Emotional | 2, 3, 6 |
//! | Intuitive | 7, 9    |

use serde::{Deserialize, Serialize};

/// The four existential planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plane {
    Mental,
    Fisico,
    Emotivo,
    Intuitivo,
}

/// All planes in display order.
pub const ALL_PLANES: [Plane; 4] = [Plane::Mental, Plane::Fisico, Plane::Emotivo, Plane::Intuitivo];

impl Plane {
    /// Plane of a letter digit, `None` outside 1..=9.
    pub const fn of_digit(digit: u8) -> Option<Self> {
        match digit {
            1 | 8 => Some(Self::Mental),
            4 | 5 => Some(Self::Fisico),
            2 | 3 | 6 => Some(Self::Emotivo),
            7 | 9 => Some(Self::Intuitivo),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Mental => "mental",
            Self::Fisico => "fisico",
            Self::Emotivo => "emotivo",
            Self::Intuitivo => "intuitivo",
        }
    }
}

/// Letter counts per plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExistentialPlanes {
    pub mental: u32,
    pub fisico: u32,
    pub emotivo: u32,
    pub intuitivo: u32,
}

impl ExistentialPlanes {
    pub fn count(&self, plane: Plane) -> u32 {
        match plane {
            Plane::Mental => self.mental,
            Plane::Fisico => self.fisico,
            Plane::Emotivo => self.emotivo,
            Plane::Intuitivo => self.intuitivo,
        }
    }

    /// Sum of all four counts.
    pub fn total(&self) -> u32 {
        self.mental + self.fisico + self.emotivo + self.intuitivo
    }
}

/// Count the raw letter digits of a name per plane.
pub fn existential_planes(raw_numbers: &[u8]) -> ExistentialPlanes {
    let mut planes = ExistentialPlanes::default();
    for &digit in raw_numbers {
        match Plane::of_digit(digit) {
            Some(Plane::Mental) => planes.mental += 1,
            Some(Plane::Fisico) => planes.fisico += 1,
            Some(Plane::Emotivo) => planes.emotivo += 1,
            Some(Plane::Intuitivo) => planes.intuitivo += 1,
            None => {}
        }
    }
    planes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::name_numbers;

    #[test]
    fn planes_partition_digits() {
        let mut seen = [0u8; 4];
        for d in 1..=9 {
            let p = Plane::of_digit(d).unwrap();
            seen[ALL_PLANES.iter().position(|&q| q == p).unwrap()] += 1;
        }
        assert_eq!(seen, [2, 2, 3, 2]);
        assert_eq!(Plane::of_digit(0), None);
        assert_eq!(Plane::of_digit(10), None);
    }

    #[test]
    fn counts_each_digit() {
        let planes = existential_planes(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(
            planes,
            ExistentialPlanes {
                mental: 2,
                fisico: 2,
                emotivo: 3,
                intuitivo: 2,
            }
        );
        assert_eq!(planes.count(Plane::Emotivo), 3);
    }

    #[test]
    fn ana_planes() {
        let planes = existential_planes(&name_numbers("ANA").raw_numbers);
        assert_eq!(planes.mental, 2);
        assert_eq!(planes.fisico, 1);
        assert_eq!(planes.total(), 3);
    }

    #[test]
    fn total_matches_letter_count() {
        for name in ["María José Fernández", "Ñandú", "x", "", "O'Brien-Smith III"] {
            let raw = name_numbers(name).raw_numbers;
            assert_eq!(existential_planes(&raw).total() as usize, raw.len(), "{name}");
        }
    }

    #[test]
    fn serde_keys() {
        let json = serde_json::to_value(existential_planes(&[7, 9, 1])).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "mental": 1, "fisico": 0, "emotivo": 0, "intuitivo": 2 })
        );
    }
}
