use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Label;
use crate::enums::{StoryState, StoryType};

/// A unit of work inside an iteration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Story {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub story_type: StoryType,
    pub current_state: StoryState,
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Only release stories carry a deadline.
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
}

impl Story {
    /// Iterate over the label names on this story.
    pub fn label_names(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|label| label.name.as_str())
    }
}
