//! Manifest Engine v1: Manifestation Cipher
//!
//! JSON payload, Caesar shift keyed by the quantum code, then standard
//! base64. Obfuscation, not encryption.
//!
//! Only ASCII letters are shifted. Other characters, including accented
//! letters, pass through so `unseal(seal(x)) == x`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Serialize;
use serde_json::Value;

use crate::domain::QuantumCode;
use crate::error::Result;

/// Shift derived from the code: sum of the digit characters' code points mod 26.
pub fn shift_for(code: &QuantumCode) -> u8 {
    let key_sum: u32 = code
        .as_str()
        .chars()
        .filter(char::is_ascii_digit)
        .map(|c| c as u32)
        .sum();
    (key_sum % 26) as u8
}

pub fn seal<T: Serialize>(payload: &T, code: &QuantumCode) -> Result<String> {
    let json = serde_json::to_string(payload)?;
    let shifted = caesar(&json, shift_for(code));
    Ok(STANDARD.encode(shifted.as_bytes()))
}

pub fn unseal(sealed: &str, code: &QuantumCode) -> Result<Value> {
    let bytes = STANDARD.decode(sealed.trim())?;
    let shifted = String::from_utf8(bytes)?;
    let json = caesar(&shifted, 26 - shift_for(code));
    Ok(serde_json::from_str(&json)?)
}

fn caesar(text: &str, shift: u8) -> String {
    let shift = shift % 26;
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
                ((c as u8 - base + shift) % 26 + base) as char
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use serde_json::json;

    fn code(s: &str) -> QuantumCode {
        s.parse().unwrap()
    }

    #[test]
    fn test_shift_for() {
        // 12 * '0'(48) + digit sum 57 = 633; 633 % 26 = 9
        assert_eq!(shift_for(&code("5790-8362-1745")), 9);
        // 576 + 48 = 624 = 24 * 26
        assert_eq!(shift_for(&code("1234-5678-9012")), 0);
    }

    #[test]
    fn test_caesar_wraps_and_keeps_case() {
        assert_eq!(caesar("xyz XYZ", 3), "abc ABC");
        assert_eq!(caesar("João-42", 1), "Kpãp-42");
        assert_eq!(caesar("abc", 26), "abc");
    }

    #[test]
    fn test_zero_shift_is_plain_base64() {
        let payload = json!({"name": "Ana"});
        let sealed = seal(&payload, &code("1234-5678-9012")).unwrap();
        assert_eq!(sealed, STANDARD.encode(r#"{"name":"Ana"}"#));
    }

    #[test]
    fn test_seal_unseal() {
        let payload = json!({
            "intention": "Eu sou próspero e abundante",
            "name": "João Silva",
            "birth_date": "15/08/1990"
        });
        let c = code("5790-8362-1745");
        let sealed = seal(&payload, &c).unwrap();
        assert_ne!(sealed, STANDARD.encode(serde_json::to_string(&payload).unwrap()));
        assert_eq!(unseal(&sealed, &c).unwrap(), payload);
    }

    #[test]
    fn test_unseal_rejects_garbage() {
        let c = code("5790-8362-1745");
        assert!(matches!(unseal("!!!not base64", &c), Err(EngineError::Base64(_))));
        let not_utf8 = STANDARD.encode([0xff, 0xfe, 0xfd]);
        assert!(matches!(unseal(&not_utf8, &c), Err(EngineError::Utf8(_))));
        let not_json = STANDARD.encode("plain words");
        assert!(matches!(unseal(&not_json, &c), Err(EngineError::Json(_))));
    }
}
