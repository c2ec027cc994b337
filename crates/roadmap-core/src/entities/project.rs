use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Project settings as returned by the Tracker project endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Project {
    pub id: u64,
    pub name: String,
    /// Sprint length in weeks.
    #[serde(default)]
    pub iteration_length: Option<u32>,
}

/// One configured project and the iteration offset to start fetching from.
///
/// The offset skips iterations older than a given sprint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectTarget {
    pub id: u64,
    #[serde(default)]
    pub offset: u32,
}

impl ProjectTarget {
    #[must_use]
    pub const fn new(id: u64, offset: u32) -> Self {
        Self { id, offset }
    }
}
