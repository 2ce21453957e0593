//! Consultation boundary for the pitagora numerology engine.
//!
//! Wraps [`pitagora_base`] with the contract a client talks to: a JSON body
//! with `nombreCompleto` and `fechaNacimiento`, validated with user-facing
//! messages, answered with the full reading or an error payload and a
//! status code.
//!
//! # Quick start
//!
//! ```rust
//! use pitagora_rs::*;
//!
//! let resp = respond_json(r#"{"nombreCompleto":"Ana","fechaNacimiento":"1990-05-24"}"#);
//! assert_eq!(resp.status(), 200);
//! let reading = resp.result().unwrap();
//! assert_eq!(reading.vidas_pasadas.to_string(), "19/1");
//! ```

pub mod convenience;
pub mod error;
pub mod request;
pub mod response;

pub use convenience::{consult, reading, respond, respond_json};
pub use error::PitagoraError;
pub use request::{Consulta, ConsultaRequest, validate};
pub use response::{ConsultaResponse, INTERNAL_ERROR_MESSAGE};

// Re-export engine types so callers don't need to depend on pitagora_base directly.
pub use pitagora_base::{
    BirthDate, Diamond, ExistentialPlanes, NumerologyError, NumerologyNumber, NumerologyResult,
    SpecialKind, SpecialNumber, compute_numerology,
};
