//! Errors surfaced by the consultation boundary.

use pitagora_base::NumerologyError;
use thiserror::Error;

/// Messages of the validation variants are shown to end users as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PitagoraError {
    #[error("El nombre completo es requerido")]
    MissingName,

    #[error("La fecha de nacimiento es requerida (formato YYYY-MM-DD)")]
    InvalidDate,

    #[error("numerology error: {0}")]
    Numerology(#[from] NumerologyError),

    #[error("invalid request body: {0}")]
    Body(String),
}

impl PitagoraError {
    /// Whether the caller sent bad input (as opposed to a failure on our side).
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingName | Self::InvalidDate)
    }
}

impl From<serde_json::Error> for PitagoraError {
    fn from(err: serde_json::Error) -> Self {
        Self::Body(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PitagoraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_classification() {
        assert!(PitagoraError::MissingName.is_validation());
        assert!(PitagoraError::InvalidDate.is_validation());
        assert!(!PitagoraError::Body("eof".into()).is_validation());
        let e: PitagoraError = NumerologyError::InvalidDateFormat("x".into()).into();
        assert!(!e.is_validation());
    }

    #[test]
    fn user_facing_messages() {
        assert_eq!(
            PitagoraError::MissingName.to_string(),
            "El nombre completo es requerido"
        );
        assert_eq!(
            PitagoraError::InvalidDate.to_string(),
            "La fecha de nacimiento es requerida (formato YYYY-MM-DD)"
        );
    }
}
