//! Structured roadmap table: columns, rows, cells and spans as data.
//!
//! Markup is produced from these types by the output layer; nothing here
//! knows about HTML.

use chrono::{DateTime, Utc};
use roadmap_core::{Epic, Iteration};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::metrics::ProgressMetrics;
use crate::ordering::order_by_start;
use crate::span::{Span, resolve_span};

/// Header date format, e.g. `Jan 2`.
const HEADER_DATE_FORMAT: &str = "%b %-d";

/// A full roadmap document: one table per successfully processed project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Roadmap {
    pub generated_at: DateTime<Utc>,
    pub projects: Vec<ProjectTable>,
}

/// One project's roadmap table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectTable {
    pub project_id: u64,
    pub caption: String,
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<EpicRow>,
}

impl ProjectTable {
    #[must_use]
    pub const fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// One iteration column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ColumnHeader {
    pub number: u32,
    pub start: DateTime<Utc>,
    pub finish: DateTime<Utc>,
    /// Display label, `start - finish` as `Jan 2 - Jan 15`.
    pub label: String,
}

/// One epic row.
///
/// `cells` covers every column exactly once: the bar cell spans
/// `span.columns()` columns, every other cell spans one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EpicRow {
    pub epic_id: u64,
    pub name: String,
    pub span: Span,
    pub cells: Vec<Cell>,
}

impl EpicRow {
    /// Number of columns covered by all cells together.
    #[must_use]
    pub fn covered_columns(&self) -> usize {
        self.cells.iter().map(Cell::colspan).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell {
    Empty,
    Bar(ProgressBar),
}

impl Cell {
    #[must_use]
    pub const fn colspan(&self) -> usize {
        match self {
            Self::Empty => 1,
            Self::Bar(bar) => bar.colspan,
        }
    }
}

/// The progress bar drawn across an epic's span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProgressBar {
    pub colspan: usize,
    pub metrics: ProgressMetrics,
}

/// Column headers for `iterations`, in order.
#[must_use]
pub fn column_headers(iterations: &[Iteration]) -> Vec<ColumnHeader> {
    iterations
        .iter()
        .map(|it| ColumnHeader {
            number: it.number,
            start: it.start,
            finish: it.finish,
            label: format!(
                "{} - {}",
                it.start.format(HEADER_DATE_FORMAT),
                it.finish.format(HEADER_DATE_FORMAT)
            ),
        })
        .collect()
}

/// Lay out one correlated epic, or `None` if it cannot be drawn.
///
/// An epic is skipped when it has no start date, no counted stories, or
/// there are no iterations to draw it on.
#[must_use]
pub fn epic_row(epic: &Epic, iterations: &[Iteration]) -> Option<EpicRow> {
    let metrics = ProgressMetrics::from_tally(&epic.tally)?;
    let span = resolve_span(&epic.dates, iterations)?;

    let trailing = iterations.len() - 1 - span.end;
    let mut cells = Vec::with_capacity(span.start + 1 + trailing);
    cells.extend(std::iter::repeat_n(Cell::Empty, span.start));
    cells.push(Cell::Bar(ProgressBar {
        colspan: span.columns(),
        metrics,
    }));
    cells.extend(std::iter::repeat_n(Cell::Empty, trailing));

    Some(EpicRow {
        epic_id: epic.id,
        name: epic.name.clone(),
        span,
        cells,
    })
}

/// Build the table for one project from correlated epics.
pub fn layout_table(
    project_id: u64,
    caption: impl Into<String>,
    epics: &[Epic],
    iterations: &[Iteration],
) -> ProjectTable {
    let rows = order_by_start(epics)
        .into_iter()
        .filter_map(|epic| {
            let row = epic_row(epic, iterations);
            if row.is_none() {
                tracing::debug!(epic_id = epic.id, name = %epic.name, "epic has no drawable span");
            }
            row
        })
        .collect();

    ProjectTable {
        project_id,
        caption: caption.into(),
        columns: column_headers(iterations),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use roadmap_core::StoryState;

    use super::*;
    use crate::correlate::correlate;
    use crate::fixtures::{day, epic, feature, release, sprints};

    #[test]
    fn headers_use_short_month_and_unpadded_day() {
        let its = sprints(2, day(2024, 1, 1));
        let headers = column_headers(&its);
        assert_eq!(headers[0].label, "Jan 1 - Jan 14");
        assert_eq!(headers[1].label, "Jan 15 - Jan 28");
        assert_eq!(headers[1].number, 2);
    }

    #[test]
    fn bar_cell_sits_at_start_column_with_colspan() {
        let mut its = sprints(6, day(2024, 1, 1));
        its[1].stories.push(feature(1, StoryState::Accepted, &["a"]));
        its[3].stories.push(feature(2, StoryState::Started, &["a"]));
        let mut epics = vec![epic(10, "a")];
        correlate(&mut epics, &its);

        let row = epic_row(&epics[0], &its).unwrap();

        assert_eq!(row.cells.len(), 4);
        assert_eq!(row.cells[0], Cell::Empty);
        let Cell::Bar(bar) = &row.cells[1] else {
            panic!("expected bar at column 1, got {:?}", row.cells[1]);
        };
        assert_eq!(bar.colspan, 3);
        assert_eq!(bar.metrics.accepted, 50.0);
        assert_eq!(bar.metrics.started, 50.0);
        assert_eq!(&row.cells[2..], &[Cell::Empty, Cell::Empty]);
        assert_eq!(row.covered_columns(), its.len());
    }

    #[test]
    fn degenerate_epics_get_no_row() {
        let mut its = sprints(3, day(2024, 1, 1));
        its[0].stories.push(feature(1, StoryState::Accepted, &["live"]));
        let mut epics = vec![epic(10, "idle"), epic(11, "live")];
        correlate(&mut epics, &its);

        let table = layout_table(1, "Payments", &epics, &its);

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].epic_id, 11);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.caption, "Payments");
    }

    #[test]
    fn release_only_epic_is_not_drawn() {
        let mut its = sprints(3, day(2024, 1, 1));
        its[1]
            .stories
            .push(release(1, &["ship"], day(2024, 1, 20)));
        let mut epics = vec![epic(10, "ship")];
        correlate(&mut epics, &its);

        assert_eq!(epics[0].tally.total, 1);
        assert!(epic_row(&epics[0], &its).is_none());
    }

    #[test]
    fn rows_follow_start_order() {
        let mut its = sprints(4, day(2024, 1, 1));
        its[2].stories.push(feature(1, StoryState::Started, &["late"]));
        its[0].stories.push(feature(2, StoryState::Started, &["early"]));
        let mut epics = vec![epic(10, "late"), epic(11, "early")];
        correlate(&mut epics, &its);

        let table = layout_table(1, "P", &epics, &its);
        let order: Vec<u64> = table.rows.iter().map(|row| row.epic_id).collect();
        assert_eq!(order, vec![11, 10]);
    }

    #[test]
    fn cell_serializes_with_kind_tag() {
        let json = serde_json::to_value(Cell::Empty).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "empty"}));
    }
}
