//! Intake mode definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Available intake modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntakeMode {
    /// Allocate the next transmittal folder, then fetch attachments into it (default).
    #[default]
    Normal,
    /// Allocate the next transmittal folder only.
    Allocate,
    /// Fetch attachments into the configured save directory only.
    Fetch,
}

impl fmt::Display for IntakeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntakeMode::Normal => write!(f, "normal"),
            IntakeMode::Allocate => write!(f, "allocate"),
            IntakeMode::Fetch => write!(f, "fetch"),
        }
    }
}

impl FromStr for IntakeMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(IntakeMode::Normal),
            "allocate" => Ok(IntakeMode::Allocate),
            "fetch" => Ok(IntakeMode::Fetch),
            _ => Err(format!("Unknown intake mode: {}", s)),
        }
    }
}

impl IntakeMode {
    /// Whether this mode allocates a transmittal folder.
    pub fn allocates(&self) -> bool {
        matches!(self, IntakeMode::Normal | IntakeMode::Allocate)
    }

    /// Whether this mode fetches attachments from the mail source.
    pub fn fetches(&self) -> bool {
        matches!(self, IntakeMode::Normal | IntakeMode::Fetch)
    }
}
