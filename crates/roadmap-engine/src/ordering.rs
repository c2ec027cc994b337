//! Row ordering for the roadmap table.

use roadmap_core::Epic;

/// Scheduled epics ordered by start date, earliest first.
///
/// Epics without a start date are dropped. The sort is stable: epics that
/// start in the same iteration keep their input order.
#[must_use]
pub fn order_by_start(epics: &[Epic]) -> Vec<&Epic> {
    let mut scheduled: Vec<&Epic> = epics.iter().filter(|epic| epic.is_scheduled()).collect();
    scheduled.sort_by_key(|epic| epic.dates.start);
    scheduled
}
