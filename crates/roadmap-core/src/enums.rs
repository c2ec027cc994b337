//! Story type and story state enums.
//!
//! Both enums use `snake_case` serialization to match the Tracker wire
//! format. Values the Tracker adds later deserialize into `Other` instead of
//! failing the whole page.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// StoryType
// ---------------------------------------------------------------------------

/// Kind of work a story represents.
///
/// Only `feature` and `release` affect epic dates; every type is counted in
/// the epic's story tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StoryType {
    Feature,
    Bug,
    Chore,
    Release,
    #[serde(other)]
    Other,
}

impl StoryType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feature => "feature",
            Self::Bug => "bug",
            Self::Chore => "chore",
            Self::Release => "release",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for StoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// StoryState
// ---------------------------------------------------------------------------

/// Workflow state of a story.
///
/// ```text
/// unscheduled → unstarted → started → finished → delivered → accepted
///                                                          → rejected → started
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StoryState {
    Unscheduled,
    Unstarted,
    Planned,
    Started,
    Finished,
    Delivered,
    Accepted,
    Rejected,
    #[serde(other)]
    Other,
}

impl StoryState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unscheduled => "unscheduled",
            Self::Unstarted => "unstarted",
            Self::Planned => "planned",
            Self::Started => "started",
            Self::Finished => "finished",
            Self::Delivered => "delivered",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for StoryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
