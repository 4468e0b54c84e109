//! Manifest Engine v1: Arithmetic Primitives
//!
//! Digit sums, numerological reduction and the fixed moduli used by the
//! derivations. All integer, no float.

/// Sacred modulus applied to `name_value * date_value`.
pub const DESTINY_MODULUS: i128 = 108;

/// Quantum codes are reduced into twelve decimal digits.
pub const CODE_MODULUS: u64 = 1_000_000_000_000;

/// Sum of the decimal digits of `n`.
pub fn digit_sum(mut n: u64) -> u64 {
    let mut total = 0;
    while n > 0 {
        total += n % 10;
        n /= 10;
    }
    total
}

/// Numerological reduction.
///
/// Repeatedly replaces `n` by its digit sum until it is a single digit.
/// A result of 0 is remapped to 9, so the codomain is exactly `1..=9`.
pub fn reduce(n: u64) -> u8 {
    let mut n = n;
    while n > 9 {
        n = digit_sum(n);
    }
    if n == 0 {
        9
    } else {
        n as u8
    }
}

/// Floor modulo for a possibly negative product, always in `0..modulus`.
pub fn floor_mod(value: i128, modulus: i128) -> u64 {
    value.rem_euclid(modulus) as u64
}
