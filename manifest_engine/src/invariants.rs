//! Manifest Engine v1: Reading Invariants
//!
//! Hard-fail validation of a derived reading. `validate_reading` panics
//! on the first failure; `try_validate_reading` returns the message so
//! readings loaded from disk can be checked without aborting.

use crate::arithmetic::{floor_mod, reduce, DESTINY_MODULUS};
use crate::engine::Reading;
use crate::sigil::{condense, SIGIL_TYPE};
use crate::tones::pulse_plan;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run every check. Panics on the first failure.
pub fn validate_reading(reading: &Reading) {
    if let Err(msg) = try_validate_reading(reading) {
        panic!("Invariant violation: {}", msg);
    }
}

/// Non-panicking variant of `validate_reading`.
pub fn try_validate_reading(reading: &Reading) -> Result<(), String> {
    try_check_reduced_range(reading)?;
    try_check_destiny(reading)?;
    try_check_expression(reading)?;
    try_check_lunar_range(reading)?;
    try_check_pulse_matches_code(reading)?;
    try_check_sigil(reading)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Individual checks
// ---------------------------------------------------------------------------

fn try_check_reduced_range(reading: &Reading) -> Result<(), String> {
    let n = &reading.numerology;
    let fields = [
        ("destiny_number", n.destiny_number),
        ("soul_number", n.soul_number),
        ("personality_number", n.personality_number),
        ("expression_number", n.expression_number),
    ];
    for (field, value) in fields {
        if !(1..=9).contains(&value) {
            return Err(format!(
                "[INVARIANT:reduced_range] {} = {} is outside 1..=9",
                field, value
            ));
        }
    }
    Ok(())
}

fn try_check_destiny(reading: &Reading) -> Result<(), String> {
    let n = &reading.numerology;
    if n.raw_destiny as i128 >= DESTINY_MODULUS {
        return Err(format!(
            "[INVARIANT:destiny] raw_destiny = {} is not below {}",
            n.raw_destiny, DESTINY_MODULUS
        ));
    }
    let expected = floor_mod(n.name_value as i128 * n.date_value as i128, DESTINY_MODULUS);
    if n.raw_destiny != expected {
        return Err(format!(
            "[INVARIANT:destiny] raw_destiny = {} but {} x {} mod {} = {}",
            n.raw_destiny, n.name_value, n.date_value, DESTINY_MODULUS, expected
        ));
    }
    if n.destiny_number != reduce(n.raw_destiny) {
        return Err(format!(
            "[INVARIANT:destiny] destiny_number = {} but reduce({}) = {}",
            n.destiny_number,
            n.raw_destiny,
            reduce(n.raw_destiny)
        ));
    }
    Ok(())
}

fn try_check_expression(reading: &Reading) -> Result<(), String> {
    let n = &reading.numerology;
    let expected = reduce(n.soul_number as u64 + n.personality_number as u64);
    if n.expression_number != expected {
        return Err(format!(
            "[INVARIANT:expression] expression_number = {} but soul {} + personality {} reduces to {}",
            n.expression_number, n.soul_number, n.personality_number, expected
        ));
    }
    Ok(())
}

fn try_check_lunar_range(reading: &Reading) -> Result<(), String> {
    let deg = reading.lunar_phase.degrees();
    if !(0.0..360.0).contains(&deg) {
        return Err(format!(
            "[INVARIANT:lunar_range] lunar phase {} is outside [0, 360)",
            deg
        ));
    }
    Ok(())
}

fn try_check_pulse_matches_code(reading: &Reading) -> Result<(), String> {
    if reading.pulse != pulse_plan(&reading.quantum_code) {
        return Err(format!(
            "[INVARIANT:pulse_plan] pulse plan does not derive from code {}",
            reading.quantum_code
        ));
    }
    Ok(())
}

fn try_check_sigil(reading: &Reading) -> Result<(), String> {
    let sigil = &reading.sigil;
    if sigil.sigil_type != SIGIL_TYPE {
        return Err(format!(
            "[INVARIANT:sigil] unknown sigil type {:?}",
            sigil.sigil_type
        ));
    }
    if sigil.condensed_text != condense(&sigil.original_intent) {
        return Err(format!(
            "[INVARIANT:sigil] condensed text {:?} does not derive from its intent",
            sigil.condensed_text
        ));
    }
    Ok(())
}
