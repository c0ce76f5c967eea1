use serde::{Deserialize, Serialize};

use crate::Code;

/// A mapping entry that matched a search query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCandidate {
    pub code: Code,
    /// Display name as stored in the mapping (original casing).
    pub name: String,
    /// Similarity in the closed interval [0, 1].
    pub similarity: f64,
}

impl MatchCandidate {
    pub fn new(code: Code, name: impl Into<String>, similarity: f64) -> Self {
        Self {
            code,
            name: name.into(),
            similarity,
        }
    }
}
