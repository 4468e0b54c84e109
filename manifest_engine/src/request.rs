//! Manifest Engine v1: Request
//!
//! Requests are pure data. They carry the caller's free text and the
//! chosen seal; no derivation logic.

use serde::{Deserialize, Serialize};

use crate::catalogue::PantacleKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestationRequest {
    pub intention: String,
    pub name: String,
    /// Expected as `DD/MM/YYYY`; anything else takes the fallback path.
    pub birth_date: String,
    #[serde(default)]
    pub pantacle: PantacleKind,
}

impl ManifestationRequest {
    pub fn new(intention: &str, name: &str, birth_date: &str) -> Self {
        Self {
            intention: intention.to_string(),
            name: name.to_string(),
            birth_date: birth_date.to_string(),
            pantacle: PantacleKind::default(),
        }
    }

    pub fn with_pantacle(mut self, pantacle: PantacleKind) -> Self {
        self.pantacle = pantacle;
        self
    }
}
