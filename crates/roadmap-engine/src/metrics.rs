//! Progress percentages derived from an epic's story tally.

use roadmap_core::StoryTally;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Share of an epic's stories in each state, in percent of `total`.
///
/// Each value is computed independently; the values are not stacked and
/// their sum is not forced to 100 (rejected or unscheduled stories count in
/// the total but in no bucket).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProgressMetrics {
    pub accepted: f64,
    pub delivered: f64,
    pub finished: f64,
    pub started: f64,
    pub unstarted: f64,
}

impl ProgressMetrics {
    /// Percentages for `tally`, or `None` when no story was counted.
    #[must_use]
    pub fn from_tally(tally: &StoryTally) -> Option<Self> {
        if tally.total == 0 {
            return None;
        }
        let total = f64::from(tally.total);
        let percent = |count: u32| 100.0 * f64::from(count) / total;

        Some(Self {
            accepted: percent(tally.accepted),
            delivered: percent(tally.delivered),
            finished: percent(tally.finished),
            started: percent(tally.started),
            unstarted: percent(tally.unstarted),
        })
    }

    /// Bar segments in render order, as `(state, percent)`.
    #[must_use]
    pub const fn segments(&self) -> [(&'static str, f64); 4] {
        [
            ("accepted", self.accepted),
            ("delivered", self.delivered),
            ("finished", self.finished),
            ("started", self.started),
        ]
    }
}
