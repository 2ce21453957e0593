//! Full numerology reading for one name and birth date.

use serde::{Deserialize, Serialize};

use crate::date::{BirthDate, DateNumbers, date_numbers};
use crate::diamond::{Diamond, diamond};
use crate::error::NumerologyError;
use crate::name::{NameNumbers, name_numbers};
use crate::planes::{ExistentialPlanes, existential_planes};
use crate::reduce::NumerologyNumber;

/// Every number of a reading, plus the inputs it was computed from.
///
/// Serializes flat with camelCase keys, the shape consumers of the
/// consultation endpoint expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyResult {
    pub nombre_completo: String,
    pub fecha_nacimiento: String,

    pub vibracion_interna: NumerologyNumber,
    pub alma: NumerologyNumber,
    pub personalidad: NumerologyNumber,
    pub mision: NumerologyNumber,
    pub planes_existenciales: ExistentialPlanes,

    pub talento: NumerologyNumber,
    pub karma: NumerologyNumber,
    pub vidas_pasadas: NumerologyNumber,
    pub camino_de_vida: NumerologyNumber,
    pub regalo_divino: NumerologyNumber,

    pub diamante: Diamond,
}

/// Compute a full reading from a name and a `YYYY-MM-DD` birth date.
///
/// Both inputs are echoed verbatim. The only failure is a date that does not
/// split into three numeric fields.
pub fn compute_numerology(
    full_name: &str,
    date_of_birth: &str,
) -> Result<NumerologyResult, NumerologyError> {
    let date: BirthDate = date_of_birth.parse()?;
    Ok(compute_reading(full_name, date_of_birth, &date))
}

/// Same as [`compute_numerology`] for an already-parsed date.
pub fn compute_reading(full_name: &str, date_text: &str, date: &BirthDate) -> NumerologyResult {
    let NameNumbers {
        vibracion_interna,
        alma,
        personalidad,
        mision,
        raw_numbers,
    } = name_numbers(full_name);
    let planes_existenciales = existential_planes(&raw_numbers);

    let DateNumbers {
        talento,
        karma,
        vidas_pasadas,
        camino_de_vida,
        regalo_divino,
    } = date_numbers(date);
    let diamante = diamond(date);

    NumerologyResult {
        nombre_completo: full_name.to_string(),
        fecha_nacimiento: date_text.to_string(),
        vibracion_interna,
        alma,
        personalidad,
        mision,
        planes_existenciales,
        talento,
        karma,
        vidas_pasadas,
        camino_de_vida,
        regalo_divino,
        diamante,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echoes_inputs_verbatim() {
        let r = compute_numerology("  Ana  ", "1990-05-24").unwrap();
        assert_eq!(r.nombre_completo, "  Ana  ");
        assert_eq!(r.fecha_nacimiento, "1990-05-24");
    }

    #[test]
    fn deterministic() {
        let a = compute_numerology("María Fernanda Núñez", "1987-12-29").unwrap();
        let b = compute_numerology("María Fernanda Núñez", "1987-12-29").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn name_and_date_branches_are_independent() {
        let a = compute_numerology("ANA", "1990-05-24").unwrap();
        let b = compute_numerology("ANA", "2001-11-02").unwrap();
        assert_eq!(a.vibracion_interna, b.vibracion_interna);
        assert_eq!(a.planes_existenciales, b.planes_existenciales);
        assert_ne!(a.diamante, b.diamante);
    }

    #[test]
    fn parse_error_propagates() {
        assert!(matches!(
            compute_numerology("Ana", "24/05/1990"),
            Err(NumerologyError::InvalidDateFormat(_))
        ));
    }
}
