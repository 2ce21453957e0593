//! Consultation request body and its validation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PitagoraError, Result};

// ASCII digits only; `\d` would also accept other Unicode decimal digits.
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));

/// A consultation as received from a client.
///
/// Fields are kept untyped so that missing, `null` and non-string values are
/// reported as validation failures instead of deserialization errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultaRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre_completo: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_nacimiento: Option<Value>,
}

impl ConsultaRequest {
    pub fn new(nombre_completo: impl Into<String>, fecha_nacimiento: impl Into<String>) -> Self {
        Self {
            nombre_completo: Some(Value::String(nombre_completo.into())),
            fecha_nacimiento: Some(Value::String(fecha_nacimiento.into())),
        }
    }

    /// Build a request from any JSON value.
    ///
    /// Objects contribute their two fields; other non-null values carry no
    /// fields and fail validation later. A `null` body is rejected here.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Err(PitagoraError::Body("request body is null".into())),
            Value::Object(_) => Ok(serde_json::from_value(value)?),
            _ => Ok(Self::default()),
        }
    }

    /// Parse a raw JSON body.
    pub fn from_json(body: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(body)?)
    }
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consulta {
    /// Trimmed full name, never empty.
    pub nombre_completo: String,
    /// Date text matching `YYYY-MM-DD`, untrimmed.
    pub fecha_nacimiento: String,
}

/// Whitespace as web clients trim it: Unicode `White_Space` plus the byte
/// order mark, minus NEL (U+0085).
fn is_blank(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// Check a request: the name must be a non-blank string and the date a
/// `YYYY-MM-DD` string. Calendar validity is not checked.
pub fn validate(request: &ConsultaRequest) -> Result<Consulta> {
    let nombre = match &request.nombre_completo {
        Some(Value::String(s)) => s.trim_matches(is_blank),
        _ => return Err(PitagoraError::MissingName),
    };
    if nombre.is_empty() {
        return Err(PitagoraError::MissingName);
    }
    let fecha = match &request.fecha_nacimiento {
        Some(Value::String(s)) if DATE_RE.is_match(s) => s.as_str(),
        _ => return Err(PitagoraError::InvalidDate),
    };
    Ok(Consulta {
        nombre_completo: nombre.to_string(),
        fecha_nacimiento: fecha.to_string(),
    })
}
