//! Manifest Engine v1: Numerology
//!
//! Name and birth-date reduction into destiny, soul, personality and
//! expression numbers.
//!
//! Malformed birth dates are not rejected. They fall back to the sum of
//! the raw string's code points, which changes the meaning of
//! `date_value` for such inputs. Callers that care should validate the
//! date themselves; the kernel keeps the fallback as-is.

use log::debug;

use crate::arithmetic::{floor_mod, reduce, DESTINY_MODULUS};
use crate::domain::NumerologyProfile;
use crate::letters::{is_vowel, letter_value};

/// Derive the full numerology profile for a name and a `DD/MM/YYYY` date.
pub fn compute_numerology(name: &str, birth_date: &str) -> NumerologyProfile {
    let cleaned = clean_name(name);

    let mut name_value: u64 = 0;
    let mut vowel_sum: u64 = 0;
    let mut consonant_sum: u64 = 0;
    for c in cleaned.chars() {
        let v = letter_value(c) as u64;
        name_value += v;
        if is_vowel(c) {
            vowel_sum += v;
        } else {
            consonant_sum += v;
        }
    }

    let date_value = date_value(birth_date);
    let raw_destiny = floor_mod(name_value as i128 * date_value as i128, DESTINY_MODULUS);

    let soul_number = reduce(vowel_sum);
    let personality_number = reduce(consonant_sum);

    NumerologyProfile {
        destiny_number: reduce(raw_destiny),
        soul_number,
        personality_number,
        expression_number: reduce(soul_number as u64 + personality_number as u64),
        name_value,
        date_value,
        raw_destiny,
    }
}

/// Lowercased alphabetic characters of `name`, any script.
pub fn clean_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphabetic())
        .collect()
}

/// `day + month + year`, or the code-point sum when the date does not parse.
pub fn date_value(birth_date: &str) -> i64 {
    match parse_date_sum(birth_date) {
        Some(sum) => sum,
        None => {
            debug!(
                "event=date_fallback module=numerology status=fallback chars={}",
                birth_date.chars().count()
            );
            birth_date.chars().map(|c| c as i64).sum()
        }
    }
}

/// Exactly three `/`-separated integers, surrounding whitespace allowed.
fn parse_date_sum(birth_date: &str) -> Option<i64> {
    let mut parts = birth_date.split('/');
    let day = parse_field(parts.next()?)?;
    let month = parse_field(parts.next()?)?;
    let year = parse_field(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    day.checked_add(month)?.checked_add(year)
}

/// Optionally signed ASCII digits. Single underscores may group digits
/// (`1_990`) but may not lead, trail or repeat.
fn parse_field(field: &str) -> Option<i64> {
    let field = field.trim();
    let unsigned = field.strip_prefix(['+', '-']).unwrap_or(field);
    if unsigned.starts_with('_') || unsigned.ends_with('_') || unsigned.contains("__") {
        return None;
    }
    field.replace('_', "").parse().ok()
}
