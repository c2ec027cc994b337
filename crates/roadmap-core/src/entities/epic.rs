use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Label;
use crate::enums::StoryState;

/// A feature grouping, joined to stories through its label name.
///
/// `dates` and `tally` are derived during correlation and never read from
/// the remote payload.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Epic {
    pub id: u64,
    #[serde(default)]
    pub project_id: u64,
    pub name: String,
    pub label: Label,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, skip_deserializing)]
    pub dates: EpicDates,
    #[serde(default, skip_deserializing)]
    pub tally: StoryTally,
}

impl Epic {
    /// Name of the label that joins stories to this epic.
    #[must_use]
    pub fn label_name(&self) -> &str {
        &self.label.name
    }

    /// Whether at least one feature story was correlated to this epic.
    #[must_use]
    pub const fn is_scheduled(&self) -> bool {
        self.dates.start.is_some()
    }
}

/// Dates derived from the iterations an epic's stories fall into.
///
/// `None` means "not observed yet".
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EpicDates {
    /// Start of the first iteration holding a feature story.
    pub start: Option<DateTime<Utc>>,
    /// Finish of the last iteration holding a feature story.
    pub finish: Option<DateTime<Utc>>,
    /// Deadline of the last release story seen.
    pub release: Option<DateTime<Utc>>,
}

/// Per-state story counters for one epic.
///
/// Counters only ever increase.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StoryTally {
    pub total: u32,
    pub unstarted: u32,
    pub started: u32,
    pub finished: u32,
    pub delivered: u32,
    pub accepted: u32,
}

impl StoryTally {
    /// Count one story in `state`.
    ///
    /// States without a bucket (rejected, unscheduled, ...) only bump
    /// `total`.
    pub const fn record(&mut self, state: StoryState) {
        self.total += 1;
        match state {
            StoryState::Unstarted => self.unstarted += 1,
            StoryState::Started => self.started += 1,
            StoryState::Finished => self.finished += 1,
            StoryState::Delivered => self.delivered += 1,
            StoryState::Accepted => self.accepted += 1,
            StoryState::Unscheduled
            | StoryState::Planned
            | StoryState::Rejected
            | StoryState::Other => {}
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }
}
