//! Manifest Engine v1: Static Catalogues
//!
//! Solfeggio tones, the golden ratio, scalar-wave pairs and the planetary
//! seals used as pantacles. Immutable, process-wide.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Golden ratio. Solfeggio tones are modulated at `frequency / PHI`.
pub const PHI: f64 = 1.618033988749895;

/// Solfeggio scale in Hz, in traditional order.
pub const SOLFEGGIO: [(&str, f64); 8] = [
    ("UT", 396.0),
    ("RE", 417.0),
    ("MI", 528.0),
    ("FA", 639.0),
    ("SOL", 741.0),
    ("LA", 852.0),
    ("SI", 963.0),
    ("OM", 432.0),
];

/// Opposed-phase pairs, each second tone 180 Hz above the first.
pub const SCALAR_PAIRS: [(f64, f64); 3] = [(396.0, 576.0), (528.0, 708.0), (852.0, 1032.0)];

/// Index of MI, the transformation tone, in `SOLFEGGIO`.
pub const MI: usize = 2;

/// Archetypal seal chosen for a manifestation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PantacleKind {
    #[default]
    Abundance,
    Love,
    Protection,
    Wisdom,
    Healing,
    Power,
}

impl PantacleKind {
    pub const ALL: [PantacleKind; 6] = [
        PantacleKind::Abundance,
        PantacleKind::Love,
        PantacleKind::Protection,
        PantacleKind::Wisdom,
        PantacleKind::Healing,
        PantacleKind::Power,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PantacleKind::Abundance => "abundance",
            PantacleKind::Love => "love",
            PantacleKind::Protection => "protection",
            PantacleKind::Wisdom => "wisdom",
            PantacleKind::Healing => "healing",
            PantacleKind::Power => "power",
        }
    }

    pub fn seal_name(&self) -> &'static str {
        match self {
            PantacleKind::Abundance => "Seal of Jupiter",
            PantacleKind::Love => "Seal of Venus",
            PantacleKind::Protection => "Seal of Saturn",
            PantacleKind::Wisdom => "Seal of Mercury",
            PantacleKind::Healing => "Seal of the Sun",
            PantacleKind::Power => "Seal of Mars",
        }
    }

    /// Where the seal artwork is published. Never fetched by the engine.
    pub fn seal_url(&self) -> &'static str {
        match self {
            PantacleKind::Abundance => {
                "https://upload.wikimedia.org/wikipedia/commons/4/48/Seal_of_Jupiter.svg"
            }
            PantacleKind::Love => {
                "https://upload.wikimedia.org/wikipedia/commons/5/5c/Seal_of_Venus.svg"
            }
            PantacleKind::Protection => {
                "https://upload.wikimedia.org/wikipedia/commons/3/3d/Seal_of_Saturn.svg"
            }
            PantacleKind::Wisdom => {
                "https://upload.wikimedia.org/wikipedia/commons/0/0f/Seal_of_Mercury.svg"
            }
            PantacleKind::Healing => {
                "https://upload.wikimedia.org/wikipedia/commons/1/1f/Seal_of_the_Sun.svg"
            }
            PantacleKind::Power => {
                "https://upload.wikimedia.org/wikipedia/commons/6/6d/Seal_of_Mars.svg"
            }
        }
    }
}

impl fmt::Display for PantacleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PantacleKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        PantacleKind::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| EngineError::UnknownPantacle(s.to_string()))
    }
}
