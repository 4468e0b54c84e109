//! Manifest Engine v1: Sigil Condensation
//!
//! Spare's method: write the intent, strike vowels and spaces, strike
//! repeated letters. Only the textual condensation lives here.

use std::collections::HashSet;

use crate::domain::Sigil;
use crate::letters::is_vowel;

pub const SIGIL_TYPE: &str = "austin_spare";

pub fn condense_sigil(intent: &str) -> Sigil {
    Sigil {
        original_intent: intent.to_string(),
        condensed_text: condense(intent),
        sigil_type: SIGIL_TYPE.to_string(),
    }
}

/// Lowercase, drop vowels and whitespace, keep first occurrences only.
pub fn condense(intent: &str) -> String {
    let mut seen = HashSet::new();
    intent
        .to_lowercase()
        .chars()
        .filter(|c| !is_vowel(*c) && !c.is_whitespace())
        .filter(|c| seen.insert(*c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_intent() {
        let sigil = condense_sigil("Eu sou próspero e abundante");
        assert_eq!(sigil.condensed_text, "spróbndt");
        assert_eq!(sigil.original_intent, "Eu sou próspero e abundante");
        assert_eq!(sigil.sigil_type, "austin_spare");
    }

    #[test]
    fn test_only_vowels_and_spaces() {
        assert_eq!(condense("A e I\to\nU"), "");
        assert_eq!(condense(""), "");
    }

    #[test]
    fn test_first_occurrence_order() {
        assert_eq!(condense("Mississippi"), "msp");
        assert_eq!(condense("I am healthy, I am strong!"), "mhlty,srng!");
    }
}
