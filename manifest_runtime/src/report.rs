//! Report layer: one manifestation reading plus everything a renderer
//! needs to produce its artifacts.
//!
//! The runtime never draws images, synthesizes audio or downloads seals.
//! It only names the files, tones and seal sources that belong to a code
//! so downstream tools agree on them.
//!
//! A sealed report carries the request only inside `sealed_payload`; the
//! plaintext `request` field is written for unsealed reports alone.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use manifest_engine::catalogue::PantacleKind;
use manifest_engine::cipher;
use manifest_engine::domain::QuantumCode;
use manifest_engine::engine::Reading;
use manifest_engine::hashing::iso_timestamp;
use manifest_engine::request::ManifestationRequest;
use manifest_engine::tones::{scalar_pairs, solfeggio_sequence, ScalarPair, SolfeggioTone};
use manifest_engine::{EngineError, ENGINE_VERSION};

/// Report on-disk format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestationReport {
    /// Engine version that derived the reading.
    pub engine_version: u32,
    /// Instant the reading was derived at, ISO-8601 without offset.
    pub generated_at: String,
    /// Plaintext request, absent when the report is sealed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<ManifestationRequest>,
    pub reading: Reading,
    pub artifacts: ArtifactPlan,
    /// Request sealed with the reading's quantum code, when enabled.
    pub sealed_payload: Option<String>,
}

impl ManifestationReport {
    /// Instant the reading was derived at, parsed back from `generated_at`.
    pub fn generated_instant(&self) -> Result<NaiveDateTime, chrono::ParseError> {
        self.generated_at.parse()
    }
}

/// Everything a renderer needs for one code: artifact file names, the
/// pantacle seal source and the tone layouts of the audio tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtifactPlan {
    pub visual: Vec<String>,
    pub audio: Vec<String>,
    pub pantacle: SealSource,
    pub solfeggio: Vec<SolfeggioTone>,
    pub scalar_pairs: Vec<ScalarPair>,
}

/// Planetary seal behind a pantacle image. The URL is recorded, never fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SealSource {
    pub kind: PantacleKind,
    pub seal_name: String,
    pub seal_url: String,
}

impl From<PantacleKind> for SealSource {
    fn from(kind: PantacleKind) -> Self {
        Self {
            kind,
            seal_name: kind.seal_name().to_string(),
            seal_url: kind.seal_url().to_string(),
        }
    }
}

const VISUAL_PREFIXES: [&str; 4] = ["flower_of_life", "merkaba", "sri_yantra", "metatron_star"];
const AUDIO_PREFIXES: [&str; 4] = [
    "quantum_pulse",
    "gnostic_induction",
    "scalar_tesla",
    "combined_manifestation",
];

impl ArtifactPlan {
    pub fn for_code(code: &QuantumCode, pantacle: PantacleKind) -> Self {
        let stem = code.stem();
        let mut visual: Vec<String> = VISUAL_PREFIXES
            .iter()
            .map(|prefix| format!("{}_{}.png", prefix, stem))
            .collect();
        visual.push(format!("pantacle_{}_{}.png", pantacle, stem));
        visual.push(format!("quantum_field_{}.png", stem));

        let audio = AUDIO_PREFIXES
            .iter()
            .map(|prefix| format!("{}_{}.wav", prefix, stem))
            .collect();

        Self {
            visual,
            audio,
            pantacle: SealSource::from(pantacle),
            solfeggio: solfeggio_sequence(),
            scalar_pairs: scalar_pairs(),
        }
    }
}

/// Assemble the report for a reading derived from `request` at `now`.
/// With `seal` set the request is stored only in sealed form.
pub fn build_report(
    request: &ManifestationRequest,
    reading: Reading,
    now: &NaiveDateTime,
    seal: bool,
) -> Result<ManifestationReport, EngineError> {
    let (request, sealed_payload) = if seal {
        (None, Some(cipher::seal(request, &reading.quantum_code)?))
    } else {
        (Some(request.clone()), None)
    };

    Ok(ManifestationReport {
        engine_version: ENGINE_VERSION,
        generated_at: iso_timestamp(now),
        request,
        artifacts: ArtifactPlan::for_code(&reading.quantum_code, reading.pantacle),
        reading,
        sealed_payload,
    })
}

/// File name a session uses for a report.
pub fn report_file_name(code: &QuantumCode) -> String {
    format!("report_{}.json", code.stem())
}

/// Recover the request sealed inside a report, keyed by the report's own code.
pub fn unseal_request(
    report: &ManifestationReport,
) -> Result<Option<ManifestationRequest>, EngineError> {
    unseal_request_with(report, &report.reading.quantum_code)
}

/// Recover the sealed request with a caller-supplied code. A code with a
/// different shift fails to decode into a request.
pub fn unseal_request_with(
    report: &ManifestationReport,
    code: &QuantumCode,
) -> Result<Option<ManifestationRequest>, EngineError> {
    match &report.sealed_payload {
        Some(sealed) => {
            let value = cipher::unseal(sealed, code)?;
            Ok(Some(serde_json::from_value(value)?))
        }
        None => Ok(None),
    }
}

/// The request behind a report: the plaintext copy when present,
/// otherwise the unsealed payload.
pub fn resolve_request(
    report: &ManifestationReport,
) -> Result<Option<ManifestationRequest>, EngineError> {
    match &report.request {
        Some(request) => Ok(Some(request.clone())),
        None => unseal_request(report),
    }
}
