//! Manifest Engine v1: Quantum Code Hashing
//!
//! SHA-256 over `intention ∥ name ∥ birth_date ∥ iso8601(now)`, first 48
//! bits of the digest, perturbed by the lunar code offset and reduced to
//! twelve decimal digits.
//!
//! The timestamp is part of the hashed text, so identical inputs at
//! different instants produce different codes.

use chrono::{NaiveDateTime, Timelike};
use sha2::{Digest, Sha256};

use crate::arithmetic::CODE_MODULUS;
use crate::domain::{LunarPhase, QuantumCode};

/// Number of leading hex characters of the digest used as the base number.
pub const BASE_HEX_CHARS: usize = 12;

/// Derive the quantum code for a request at instant `now`.
pub fn generate_quantum_code(
    intention: &str,
    name: &str,
    birth_date: &str,
    now: &NaiveDateTime,
) -> QuantumCode {
    let blob = format!("{}{}{}{}", intention, name, birth_date, iso_timestamp(now));
    let base = base_number(&blob);
    let offset = LunarPhase::at(now).code_offset();
    QuantumCode::from_number((base + offset) % CODE_MODULUS)
}

/// First twelve hex characters of the digest read as an integer, i.e. the
/// first six digest bytes big-endian.
pub fn base_number(text: &str) -> u64 {
    let digest = Sha256::digest(text.as_bytes());
    digest[..BASE_HEX_CHARS / 2]
        .iter()
        .fold(0u64, |acc, b| (acc << 8) | *b as u64)
}

/// ISO-8601 without offset. Microseconds are appended only when non-zero.
pub fn iso_timestamp(now: &NaiveDateTime) -> String {
    let seconds = now.format("%Y-%m-%dT%H:%M:%S");
    let micros = (now.nanosecond() % 1_000_000_000) / 1_000;
    if micros == 0 {
        seconds.to_string()
    } else {
        format!("{}.{:06}", seconds, micros)
    }
}
