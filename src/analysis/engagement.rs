//! Engagement deriver: first/latest shift and active span per worker.

use crate::models::{Shift, Worker};
use std::collections::BTreeMap;

/// Scan the shift table once per worker and record the extremes of their
/// shift starts. Workers with no shifts keep `None`/`None`/0.
///
/// Quadratic in (workers x shifts); fine at VTracklery export sizes.
pub fn derive_engagement(workers: &mut BTreeMap<u32, Worker>, shifts: &[Shift]) {
    for worker in workers.values_mut() {
        let mut first = None;
        let mut latest = None;

        for shift in shifts.iter().filter(|s| s.worker_id == worker.id) {
            first = Some(match first {
                None => shift.start,
                Some(t) if shift.start < t => shift.start,
                Some(t) => t,
            });
            latest = Some(match latest {
                None => shift.start,
                Some(t) if shift.start > t => shift.start,
                Some(t) => t,
            });
        }

        if let (Some(f), Some(l)) = (first, latest) {
            worker.set_engagement(f, l);
        }
    }
}
