//! Counter for volunteers with no work record at all.

use crate::models::Worker;
use std::collections::BTreeMap;

/// Counted over the full population, not the cohort: a worker outside the
/// join window with zero shifts still counts.
pub fn count_missing(workers: &BTreeMap<u32, Worker>) -> usize {
    workers.values().filter(|w| !w.has_shifts()).count()
}
