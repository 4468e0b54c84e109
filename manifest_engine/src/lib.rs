#![forbid(unsafe_code)]

//! Manifest Engine v1: pure derivation kernel.
//!
//! Numerology profiles, Conway lunar phase, hash-derived quantum codes,
//! sigil condensation, the manifestation cipher and the static tone and
//! seal catalogues. No I/O. The instant is always supplied by the caller.

/// Engine v1. Changing any derivation rule requires a new version.
pub const ENGINE_VERSION: u32 = 1;

pub mod arithmetic;
pub mod letters;
pub mod domain;
pub mod error;
pub mod numerology;
pub mod lunar;
pub mod hashing;
pub mod sigil;
pub mod cipher;
pub mod catalogue;
pub mod tones;
pub mod request;
pub mod invariants;
pub mod engine;

pub use domain::{LunarPhase, NumerologyProfile, QuantumCode, Sigil};
pub use engine::{derive_reading, Reading};
pub use error::EngineError;
pub use hashing::generate_quantum_code;
pub use lunar::compute_lunar_phase;
pub use numerology::compute_numerology;
pub use request::ManifestationRequest;
