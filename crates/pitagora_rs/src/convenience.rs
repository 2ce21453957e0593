use pitagora_base::{NumerologyResult, compute_numerology};
use tracing::{debug, error, warn};

use crate::error::Result;
use crate::request::{ConsultaRequest, validate};
use crate::response::ConsultaResponse;

/// Validate a request and compute its reading.
///
/// The reading echoes the trimmed name and the date text as received.
pub fn consult(request: &ConsultaRequest) -> Result<NumerologyResult> {
    let consulta = validate(request)?;
    debug!(
        name_chars = consulta.nombre_completo.chars().count(),
        date = %consulta.fecha_nacimiento,
        "computing numerology reading"
    );
    Ok(compute_numerology(
        &consulta.nombre_completo,
        &consulta.fecha_nacimiento,
    )?)
}

/// Run a consultation and classify the outcome into a response.
pub fn respond(request: &ConsultaRequest) -> ConsultaResponse {
    match consult(request) {
        Ok(result) => result.into(),
        Err(err) if err.is_validation() => {
            warn!(%err, "rejected consultation");
            err.into()
        }
        Err(err) => {
            error!(%err, "numerology computation failed");
            err.into()
        }
    }
}

/// Run a consultation from a raw JSON body.
///
/// A body that is not JSON at all is an internal failure, not a
/// validation failure.
pub fn respond_json(body: &str) -> ConsultaResponse {
    match ConsultaRequest::from_json(body) {
        Ok(request) => respond(&request),
        Err(err) => {
            error!(%err, "unreadable consultation body");
            err.into()
        }
    }
}

/// Shorthand for a reading from plain strings, with the same validation
/// as [`consult`].
pub fn reading(nombre_completo: &str, fecha_nacimiento: &str) -> Result<NumerologyResult> {
    consult(&ConsultaRequest::new(nombre_completo, fecha_nacimiento))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PitagoraError;

    #[test]
    fn consult_trims_name_but_not_date() {
        let r = reading("  ANA  ", "1990-05-24").unwrap();
        assert_eq!(r.nombre_completo, "ANA");
        assert_eq!(r.fecha_nacimiento, "1990-05-24");
    }

    #[test]
    fn consult_reports_validation() {
        assert_eq!(reading("", "1990-05-24"), Err(PitagoraError::MissingName));
        assert_eq!(reading("Ana", "24-05-1990"), Err(PitagoraError::InvalidDate));
    }

    #[test]
    fn respond_statuses() {
        assert_eq!(respond(&ConsultaRequest::new("Ana", "1990-05-24")).status(), 200);
        assert_eq!(respond(&ConsultaRequest::default()).status(), 400);
        assert_eq!(respond_json("{").status(), 500);
        assert_eq!(respond_json("null").status(), 500);
    }
}
