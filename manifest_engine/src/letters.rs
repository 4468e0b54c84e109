//! Manifest Engine v1: Letter Table
//!
//! Simplified gematria over the 26-letter Latin alphabet. Positions 1..9
//! repeat three times: a..i, j..r, s..z.

/// Letter values indexed by `c - 'a'`.
pub const LETTER_VALUES: [u8; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, // a b c d e f g h i
    1, 2, 3, 4, 5, 6, 7, 8, 9, // j k l m n o p q r
    1, 2, 3, 4, 5, 6, 7, 8, //    s t u v w x y z
];

/// Vowels counted towards the soul number.
pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Value of a lowercase letter. Anything outside `a..=z` is worth 0.
pub fn letter_value(c: char) -> u8 {
    if c.is_ascii_lowercase() {
        LETTER_VALUES[(c as u8 - b'a') as usize]
    } else {
        0
    }
}

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_closed_form() {
        for (i, c) in ('a'..='z').enumerate() {
            assert_eq!(letter_value(c) as usize, (i % 9) + 1, "letter {}", c);
        }
    }

    #[test]
    fn test_non_latin_is_zero() {
        assert_eq!(letter_value('ã'), 0);
        assert_eq!(letter_value('é'), 0);
        assert_eq!(letter_value('A'), 0);
        assert_eq!(letter_value('7'), 0);
        assert_eq!(letter_value('ж'), 0);
    }

    #[test]
    fn test_vowels() {
        assert!(is_vowel('a'));
        assert!(is_vowel('u'));
        assert!(!is_vowel('y'));
        assert!(!is_vowel('ó'));
    }
}
