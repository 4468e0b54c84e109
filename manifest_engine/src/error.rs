//! Manifest Engine v1: Errors
//!
//! Derivations never fail. Only parsing of external text (codes, seal
//! names) and unsealing of cipher payloads can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid quantum code {0:?}: expected DDDD-DDDD-DDDD")]
    InvalidCode(String),

    #[error("unknown pantacle {0:?}: expected abundance|love|protection|wisdom|healing|power")]
    UnknownPantacle(String),

    #[error("sealed payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("sealed payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("sealed payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
