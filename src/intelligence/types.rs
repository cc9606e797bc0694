use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// InteractionPair
// ---------------------------------------------------------------------------

/// Two medications from the input list with a known adverse interaction.
/// Names keep their original spelling; `a` precedes `b` in the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InteractionPair {
    pub a: String,
    pub b: String,
}

impl InteractionPair {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    /// Canonical names in sorted order, for comparing pairs irrespective of
    /// input position.
    pub fn unordered_key(&self) -> (String, String) {
        let a = super::canonical_name(&self.a);
        let b = super::canonical_name(&self.b);
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

// ---------------------------------------------------------------------------
// InteractionError
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum InteractionError {
    #[error("Failed to load reference data from {0}: {1}")]
    ReferenceDataLoad(String, String),

    #[error("Failed to parse reference data {0}: {1}")]
    ReferenceDataParse(String, String),
}
