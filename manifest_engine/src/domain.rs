//! Manifest Engine v1: Core Domain Types
//!
//! Pure data. Every value is computed once per request and never mutated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::arithmetic::CODE_MODULUS;
use crate::error::EngineError;

// ── Numerology ─────────────────────────────────────────────────────

/// Reduced numerology numbers plus the raw sums they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NumerologyProfile {
    pub destiny_number: u8,      // 1..=9
    pub soul_number: u8,         // 1..=9, vowels
    pub personality_number: u8,  // 1..=9, consonants
    pub expression_number: u8,   // 1..=9
    pub name_value: u64,
    pub date_value: i64,
    pub raw_destiny: u64,        // 0..108
}

// ── Quantum code ───────────────────────────────────────────────────

/// Twelve decimal digits in three hyphenated groups: `DDDD-DDDD-DDDD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuantumCode(String);

impl QuantumCode {
    /// Format a number as a code. Values are reduced modulo 10^12 first.
    pub fn from_number(n: u64) -> Self {
        let digits = format!("{:012}", n % CODE_MODULUS);
        QuantumCode(format!("{}-{}-{}", &digits[..4], &digits[4..8], &digits[8..]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The twelve digit values in order.
    pub fn digits(&self) -> Vec<u8> {
        self.0
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect()
    }

    /// File-name stem: hyphens replaced by underscores.
    pub fn stem(&self) -> String {
        self.0.replace('-', "_")
    }
}

impl fmt::Display for QuantumCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for QuantumCode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 14
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 9 => *b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !well_formed {
            return Err(EngineError::InvalidCode(s.to_string()));
        }
        Ok(QuantumCode(s.to_string()))
    }
}

impl TryFrom<String> for QuantumCode {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<QuantumCode> for String {
    fn from(code: QuantumCode) -> Self {
        code.0
    }
}

// ── Lunar phase ────────────────────────────────────────────────────

/// Synodic phase angle in degrees, always within `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LunarPhase(f64);

impl LunarPhase {
    pub fn from_degrees(degrees: f64) -> Self {
        let normalized = degrees.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360.0 for tiny negatives
        if normalized >= 360.0 {
            LunarPhase(0.0)
        } else {
            LunarPhase(normalized)
        }
    }

    pub fn degrees(&self) -> f64 {
        self.0
    }

    /// Day within the 30-step Conway cycle, `0..30`.
    pub fn phase_day(&self) -> u8 {
        (self.0 / 12.0).round() as u8 % 30
    }

    /// Additive perturbation applied to quantum codes: `floor(degrees * 1000)`.
    pub fn code_offset(&self) -> u64 {
        (self.0 * 1000.0).floor() as u64
    }
}

// ── Sigil ──────────────────────────────────────────────────────────

/// Austin Osman Spare style condensed statement of intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Sigil {
    pub original_intent: String,
    pub condensed_text: String,
    pub sigil_type: String,
}
