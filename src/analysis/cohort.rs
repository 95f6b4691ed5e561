//! Cohort filter: the comparison population for the retention analyses.

use crate::models::Worker;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

/// Worker ids with at least one shift whose join date falls in the
/// half-open window `[start, end)`.
///
/// Every cohort-restricted statistic divides by the size of this set;
/// callers must not substitute the full worker population.
pub fn select_cohort(
    workers: &BTreeMap<u32, Worker>,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Vec<u32> {
    workers
        .values()
        .filter(|w| w.has_shifts() && w.join_date >= start && w.join_date < end)
        .map(|w| w.id)
        .collect()
}
