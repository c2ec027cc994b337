//! Mapping of epic dates onto iteration columns.

use roadmap_core::{EpicDates, Iteration};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Inclusive range of iteration columns an epic occupies.
///
/// Always satisfies `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    /// The release date pushed `end` past the last feature iteration.
    pub extended_by_release: bool,
}

impl Span {
    /// Number of columns covered.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Resolve the columns covered by an epic with the given dates.
///
/// - `start`: the iteration whose start equals `dates.start`, else column 0.
/// - finish: the iteration whose finish equals `dates.finish`, else the last
///   column.
/// - release: the iteration strictly containing `dates.release`; when found
///   after the finish column it becomes the end.
///
/// Returns `None` for an unscheduled epic (no start date) or when there are
/// no iterations. The result is clamped so `start <= end < iterations.len()`.
pub fn resolve_span(dates: &EpicDates, iterations: &[Iteration]) -> Option<Span> {
    let start_date = dates.start?;
    let last = iterations.len().checked_sub(1)?;

    let start = iterations
        .iter()
        .position(|it| it.start == start_date)
        .unwrap_or_else(|| {
            tracing::debug!(start = %start_date, "start date matches no iteration, using first column");
            0
        });

    let finish = dates
        .finish
        .and_then(|finish| iterations.iter().rposition(|it| it.finish == finish))
        .unwrap_or_else(|| {
            tracing::debug!(finish = ?dates.finish, "finish date matches no iteration, using last column");
            last
        });

    let release = dates
        .release
        .and_then(|release| iterations.iter().position(|it| it.strictly_contains(release)));

    let end = match release {
        Some(release) if release > finish => release,
        _ => finish,
    }
    .max(start);

    Some(Span {
        start,
        end,
        extended_by_release: end > finish.max(start),
    })
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::fixtures::{day, sprints};

    fn dates(its: &[Iteration], start: usize, finish: usize) -> EpicDates {
        EpicDates {
            start: Some(its[start].start),
            finish: Some(its[finish].finish),
            release: None,
        }
    }

    #[test]
    fn unscheduled_epic_has_no_span() {
        let its = sprints(3, day(2024, 1, 1));
        assert_eq!(resolve_span(&EpicDates::default(), &its), None);
    }

    #[test]
    fn no_iterations_has_no_span() {
        let dates = EpicDates {
            start: Some(day(2024, 1, 1)),
            ..EpicDates::default()
        };
        assert_eq!(resolve_span(&dates, &[]), None);
    }

    #[test]
    fn feature_range_maps_to_columns() {
        let its = sprints(6, day(2024, 1, 1));
        let span = resolve_span(&dates(&its, 1, 3), &its).unwrap();
        assert_eq!(
            span,
            Span {
                start: 1,
                end: 3,
                extended_by_release: false,
            }
        );
        assert_eq!(span.columns(), 3);
    }

    #[test]
    fn release_after_finish_extends_the_span() {
        // Iteration #3 runs 2024-01-01..01-14, #5 runs 2024-01-29..02-11.
        let its = sprints(8, day(2023, 11, 20));
        assert_eq!(its[3].start, day(2024, 1, 1));
        assert_eq!(its[5].start, day(2024, 1, 29));

        let dates = EpicDates {
            start: Some(day(2024, 1, 1)),
            finish: Some(day(2024, 1, 14)),
            release: Some(day(2024, 2, 3)),
        };

        let span = resolve_span(&dates, &its).unwrap();
        assert_eq!(span.start, 3);
        assert_eq!(span.end, 5);
        assert!(span.extended_by_release);
    }

    #[test]
    fn release_before_finish_does_not_shrink_the_span() {
        let its = sprints(6, day(2024, 1, 1));
        let mut dates = dates(&its, 1, 4);
        dates.release = Some(its[2].start + Duration::days(3));

        let span = resolve_span(&dates, &its).unwrap();
        assert_eq!((span.start, span.end), (1, 4));
        assert!(!span.extended_by_release);
    }

    #[test]
    fn release_in_first_column_counts_as_found() {
        let its = sprints(4, day(2024, 1, 1));
        let dates = EpicDates {
            start: Some(its[0].start),
            finish: None,
            release: Some(its[0].start + Duration::days(2)),
        };

        // Missing finish falls back to the last column; the release hit in
        // column 0 must not override that.
        let span = resolve_span(&dates, &its).unwrap();
        assert_eq!((span.start, span.end), (0, 3));
    }

    #[test]
    fn release_on_iteration_boundary_is_not_contained() {
        let its = sprints(4, day(2024, 1, 1));
        let mut dates = dates(&its, 0, 0);
        dates.release = Some(its[2].start);

        let span = resolve_span(&dates, &its).unwrap();
        assert_eq!(span.end, 0);
        assert!(!span.extended_by_release);
    }

    #[test]
    fn release_outside_every_iteration_is_ignored() {
        let its = sprints(4, day(2024, 1, 1));
        let mut dates = dates(&its, 1, 2);
        dates.release = Some(day(2030, 1, 1));

        let span = resolve_span(&dates, &its).unwrap();
        assert_eq!((span.start, span.end), (1, 2));
    }

    #[test]
    fn unmatched_start_falls_back_to_first_column() {
        let its = sprints(4, day(2024, 1, 1));
        let dates = EpicDates {
            start: Some(day(2024, 1, 3)),
            finish: Some(its[1].finish),
            release: None,
        };

        let span = resolve_span(&dates, &its).unwrap();
        assert_eq!((span.start, span.end), (0, 1));
    }

    #[test]
    fn span_is_clamped_when_finish_precedes_start() {
        let its = sprints(5, day(2024, 1, 1));
        let dates = EpicDates {
            start: Some(its[3].start),
            finish: Some(its[1].finish),
            release: None,
        };

        let span = resolve_span(&dates, &its).unwrap();
        assert_eq!((span.start, span.end), (3, 3));
        assert_eq!(span.columns(), 1);
    }

    #[test]
    fn release_swallowed_by_clamp_does_not_count_as_extension() {
        let its = sprints(5, day(2024, 1, 1));
        let dates = EpicDates {
            start: Some(its[3].start),
            finish: Some(its[1].finish),
            release: Some(its[2].start + Duration::days(2)),
        };

        let span = resolve_span(&dates, &its).unwrap();
        assert_eq!(
            span,
            Span {
                start: 3,
                end: 3,
                extended_by_release: false,
            }
        );
    }

    #[test]
    fn release_past_a_clamped_start_still_extends() {
        let its = sprints(6, day(2024, 1, 1));
        let dates = EpicDates {
            start: Some(its[3].start),
            finish: Some(its[1].finish),
            release: Some(its[4].start + Duration::days(2)),
        };

        let span = resolve_span(&dates, &its).unwrap();
        assert_eq!((span.start, span.end), (3, 4));
        assert!(span.extended_by_release);
    }

    #[test]
    fn every_resolved_span_is_within_bounds() {
        let its = sprints(6, day(2024, 1, 1));
        for start in 0..its.len() {
            for finish in 0..its.len() {
                for release in [None, Some(its[finish].start + Duration::days(1))] {
                    let mut dates = dates(&its, start, finish);
                    dates.release = release;
                    let span = resolve_span(&dates, &its).unwrap();
                    assert!(span.start <= span.end);
                    assert!(span.end < its.len());
                }
            }
        }
    }
}
