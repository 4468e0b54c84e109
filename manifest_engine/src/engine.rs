//! Manifest Engine v1: Engine
//!
//! Top-level derivation. Delegates to the numerology, lunar, hashing,
//! sigil and tone layers, then validates the bundle via invariants.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::catalogue::PantacleKind;
use crate::domain::{LunarPhase, NumerologyProfile, QuantumCode, Sigil};
use crate::hashing::generate_quantum_code;
use crate::invariants::validate_reading;
use crate::numerology::compute_numerology;
use crate::request::ManifestationRequest;
use crate::sigil::condense_sigil;
use crate::tones::{pulse_plan, PulsePlan};

/// Everything the engine derives for one request at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Reading {
    pub numerology: NumerologyProfile,
    pub lunar_phase: LunarPhase,
    pub quantum_code: QuantumCode,
    pub sigil: Sigil,
    pub pulse: PulsePlan,
    pub pantacle: PantacleKind,
}

/// Derive a reading:
///   1. Numerology from name and birth date
///   2. Lunar phase from the calendar date of `now`
///   3. Quantum code from all inputs plus `now`
///   4. Sigil from the intention
///   5. Pulse plan from the code
///   6. Validate invariants
pub fn derive_reading(request: &ManifestationRequest, now: &NaiveDateTime) -> Reading {
    let quantum_code = generate_quantum_code(
        &request.intention,
        &request.name,
        &request.birth_date,
        now,
    );
    let pulse = pulse_plan(&quantum_code);

    let reading = Reading {
        numerology: compute_numerology(&request.name, &request.birth_date),
        lunar_phase: LunarPhase::at(now),
        quantum_code,
        sigil: condense_sigil(&request.intention),
        pulse,
        pantacle: request.pantacle,
    };

    validate_reading(&reading);
    reading
}
