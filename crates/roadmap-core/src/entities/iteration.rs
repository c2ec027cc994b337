use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Story;

/// A sprint. Iterations form the column axis of the roadmap.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Iteration {
    pub number: u32,
    #[serde(default)]
    pub project_id: Option<u64>,
    pub start: DateTime<Utc>,
    pub finish: DateTime<Utc>,
    #[serde(default)]
    pub stories: Vec<Story>,
}

impl Iteration {
    /// Whether `instant` lies strictly inside `(start, finish)`.
    ///
    /// Both boundaries are excluded: an instant equal to `start` or `finish`
    /// does not belong to this iteration.
    #[must_use]
    pub fn strictly_contains(&self, instant: DateTime<Utc>) -> bool {
        instant > self.start && instant < self.finish
    }
}
