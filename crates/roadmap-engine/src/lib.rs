//! # roadmap-engine
//!
//! Correlation and timeline layout for the roadmap.
//!
//! Turns one project's record set into render-ready rows:
//! 1. [`correlate`] joins stories to epics by label name and fills each
//!    epic's dates and story tally.
//! 2. [`ProgressMetrics`] converts a tally into percentages.
//! 3. [`resolve_span`] maps an epic's dates onto iteration columns.
//! 4. [`order_by_start`] orders scheduled epics by start date.
//! 5. [`layout_table`] assembles a [`ProjectTable`] of cells and spans.
//!
//! Everything here is synchronous and free of I/O.

pub mod correlate;
pub mod layout;
pub mod metrics;
pub mod ordering;
pub mod span;

#[cfg(test)]
mod fixtures;

pub use correlate::correlate;
pub use layout::{
    Cell, ColumnHeader, EpicRow, ProgressBar, ProjectTable, Roadmap, column_headers, epic_row,
    layout_table,
};
pub use metrics::ProgressMetrics;
pub use ordering::order_by_start;
pub use span::{Span, resolve_span};

use roadmap_core::{Epic, Iteration};

/// Correlate `epics` against `iterations`, then lay out the table.
///
/// `epics` is mutated in place by the correlation pass.
pub fn build_table(
    project_id: u64,
    caption: impl Into<String>,
    epics: &mut [Epic],
    iterations: &[Iteration],
) -> ProjectTable {
    correlate(epics, iterations);
    layout_table(project_id, caption, epics, iterations)
}

/// JSON schema of the [`Roadmap`] document.
#[must_use]
pub fn report_schema() -> schemars::Schema {
    schemars::schema_for!(Roadmap)
}
