//! Manifest Engine v1: Pulse Tone Plan
//!
//! Maps a quantum code to the harmonics of its audio pulse, and lays out
//! the Solfeggio sequence and scalar pairs. Describes the tones only;
//! waveform synthesis is left to whoever renders them.

use serde::{Deserialize, Serialize};

use crate::catalogue::{MI, PHI, SCALAR_PAIRS, SOLFEGGIO};
use crate::domain::QuantumCode;

/// At most this many leading code digits become harmonics.
pub const MAX_HARMONICS: usize = 8;

/// Transformation carrier, the MI tone.
pub const CARRIER_HZ: f64 = SOLFEGGIO[MI].1;
pub const CARRIER_AMPLITUDE: f64 = 0.2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PulseHarmonic {
    pub digit: u8,
    pub frequency_hz: f64,
    pub amplitude: f64,
    pub modulation_hz: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PulsePlan {
    pub harmonics: Vec<PulseHarmonic>,
    pub carrier_hz: f64,
    pub carrier_amplitude: f64,
}

/// Digit `n` at position `i` becomes `200 + 200n` Hz at amplitude
/// `0.1 / (i + 1)`. Zero digits are silent but keep their position.
pub fn pulse_plan(code: &QuantumCode) -> PulsePlan {
    let harmonics = code
        .digits()
        .into_iter()
        .take(MAX_HARMONICS)
        .enumerate()
        .filter(|(_, digit)| *digit > 0)
        .map(|(i, digit)| {
            let frequency_hz = 200.0 + digit as f64 * 200.0;
            PulseHarmonic {
                digit,
                frequency_hz,
                amplitude: 0.1 / (i as f64 + 1.0),
                modulation_hz: frequency_hz / 10.0,
            }
        })
        .collect();

    PulsePlan {
        harmonics,
        carrier_hz: CARRIER_HZ,
        carrier_amplitude: CARRIER_AMPLITUDE,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolfeggioTone {
    pub syllable: String,
    pub frequency_hz: f64,
    pub modulation_hz: f64,
}

/// Every Solfeggio tone in scale order, each modulated at `frequency / PHI`.
pub fn solfeggio_sequence() -> Vec<SolfeggioTone> {
    SOLFEGGIO
        .iter()
        .map(|(syllable, hz)| SolfeggioTone {
            syllable: (*syllable).to_string(),
            frequency_hz: *hz,
            modulation_hz: hz / PHI,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScalarPair {
    pub frequency_hz: f64,
    pub opposed_hz: f64,
}

pub fn scalar_pairs() -> Vec<ScalarPair> {
    SCALAR_PAIRS
        .iter()
        .map(|(frequency_hz, opposed_hz)| ScalarPair {
            frequency_hz: *frequency_hz,
            opposed_hz: *opposed_hz,
        })
        .collect()
}
