//! Report Codec: deterministic ManifestationReport encoder/decoder.
//!
//! - `encode_report`:  report → JSON string
//! - `decode_report`:  JSON string → report (strict, unknown fields rejected)
//! - `restore_report`: decode + reading invariants + request cross-checks
//! - `export_report_to_file` / `import_report_from_file`: file I/O
//! - `report_hash`:    SHA-256 of the encoded JSON (lowercase hex)

use std::fs;
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};
use thiserror::Error;

use manifest_engine::engine::derive_reading;
use manifest_engine::invariants::try_validate_reading;

use crate::report::{resolve_request, unseal_request, ArtifactPlan, ManifestationReport};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("SerializationError: {0}")]
    Serialization(String),

    #[error("DeserializationError: {0}")]
    Deserialization(String),

    #[error("InvariantViolation: {0}")]
    InvariantViolation(String),

    #[error("EngineError: {0}")]
    Engine(#[from] manifest_engine::EngineError),

    #[error("IoError: {0}")]
    Io(#[from] io::Error),
}

// ---------------------------------------------------------------------------
// Encoder / decoder
// ---------------------------------------------------------------------------

/// Encode a report as JSON. Field order is fixed by the struct
/// definitions, so equal reports encode to identical bytes.
pub fn encode_report(report: &ManifestationReport) -> Result<String, ReportError> {
    serde_json::to_string_pretty(report).map_err(|e| ReportError::Serialization(e.to_string()))
}

/// Strict decode. No invariant validation; see `restore_report`.
pub fn decode_report(json: &str) -> Result<ManifestationReport, ReportError> {
    serde_json::from_str::<ManifestationReport>(json)
        .map_err(|e| ReportError::Deserialization(e.to_string()))
}

/// Decode, validate the embedded reading, then re-derive it from the
/// report's request and instant. Safe entry point for files that may have
/// been edited by hand.
pub fn restore_report(json: &str) -> Result<ManifestationReport, ReportError> {
    let report = decode_report(json)?;
    try_validate_reading(&report.reading).map_err(ReportError::InvariantViolation)?;
    try_check_against_request(&report)?;
    Ok(report)
}

fn violation(msg: String) -> ReportError {
    ReportError::InvariantViolation(msg)
}

/// The reading and artifact plan must be exactly what the request derives
/// at `generated_at`.
fn try_check_against_request(report: &ManifestationReport) -> Result<(), ReportError> {
    let request = resolve_request(report)?.ok_or_else(|| {
        violation("[INVARIANT:request] report carries neither a request nor a sealed payload".into())
    })?;
    if report.request.is_some()
        && report.sealed_payload.is_some()
        && unseal_request(report)?.as_ref() != Some(&request)
    {
        return Err(violation(
            "[INVARIANT:request] plaintext request differs from the sealed payload".into(),
        ));
    }

    let at = report.generated_instant().map_err(|e| {
        violation(format!(
            "[INVARIANT:generated_at] {:?} is not an ISO-8601 instant: {}",
            report.generated_at, e
        ))
    })?;
    let expected = derive_reading(&request, &at);
    let reading = &report.reading;

    if reading.numerology != expected.numerology {
        return Err(violation(
            "[INVARIANT:request_numerology] numerology does not derive from the request name and birth date".into(),
        ));
    }
    if reading.sigil != expected.sigil {
        return Err(violation(
            "[INVARIANT:request_sigil] sigil does not derive from the request intention".into(),
        ));
    }
    if reading.pantacle != expected.pantacle {
        return Err(violation(format!(
            "[INVARIANT:request_pantacle] reading pantacle {} but request asks for {}",
            reading.pantacle, expected.pantacle
        )));
    }
    if reading.quantum_code != expected.quantum_code {
        return Err(violation(format!(
            "[INVARIANT:quantum_code] code {} does not derive from the request at {}",
            reading.quantum_code, report.generated_at
        )));
    }
    if reading.lunar_phase != expected.lunar_phase {
        return Err(violation(format!(
            "[INVARIANT:lunar_phase] phase {} does not match {}",
            reading.lunar_phase.degrees(),
            report.generated_at
        )));
    }
    if report.artifacts != ArtifactPlan::for_code(&reading.quantum_code, reading.pantacle) {
        return Err(violation(format!(
            "[INVARIANT:artifacts] artifact plan does not belong to code {}",
            reading.quantum_code
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// File I/O
// ---------------------------------------------------------------------------

/// Write the encoded report, creating parent directories as needed.
pub fn export_report_to_file(report: &ManifestationReport, path: &Path) -> Result<(), ReportError> {
    let json = encode_report(report)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json.as_bytes())?;
    Ok(())
}

pub fn import_report_from_file(path: &Path) -> Result<ManifestationReport, ReportError> {
    let content = fs::read_to_string(path)?;
    restore_report(&content)
}

// ---------------------------------------------------------------------------
// Hash
// ---------------------------------------------------------------------------

/// SHA-256 of the encoded report, for detecting edited report files.
pub fn report_hash(report: &ManifestationReport) -> Result<String, ReportError> {
    let json = encode_report(report)?;
    Ok(hex::encode(Sha256::digest(json.as_bytes())))
}
