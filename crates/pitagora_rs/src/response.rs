//! Consultation responses and their status classification.

use pitagora_base::NumerologyResult;
use serde::Serialize;

use crate::error::PitagoraError;

/// Message returned for failures that are not the caller's fault.
pub const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor";

/// Outcome of a consultation, ready to be sent back to a client.
///
/// Serializes to the reading itself on success, or to `{ "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConsultaResponse {
    Success(Box<NumerologyResult>),
    Invalid { error: String },
    Internal { error: String },
}

impl ConsultaResponse {
    /// HTTP-style status code: 200, 400 or 500.
    pub fn status(&self) -> u16 {
        match self {
            Self::Success(_) => 200,
            Self::Invalid { .. } => 400,
            Self::Internal { .. } => 500,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The reading, if the consultation succeeded.
    pub fn result(&self) -> Option<&NumerologyResult> {
        match self {
            Self::Success(r) => Some(r.as_ref()),
            _ => None,
        }
    }

    /// The user-facing message, if the consultation failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Invalid { error } | Self::Internal { error } => Some(error.as_str()),
        }
    }

    pub fn to_json(&self) -> Result<String, PitagoraError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, PitagoraError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<NumerologyResult> for ConsultaResponse {
    fn from(result: NumerologyResult) -> Self {
        Self::Success(Box::new(result))
    }
}

impl From<PitagoraError> for ConsultaResponse {
    /// Validation errors keep their message; anything else is masked.
    fn from(err: PitagoraError) -> Self {
        if err.is_validation() {
            Self::Invalid {
                error: err.to_string(),
            }
        } else {
            Self::Internal {
                error: INTERNAL_ERROR_MESSAGE.to_string(),
            }
        }
    }
}
