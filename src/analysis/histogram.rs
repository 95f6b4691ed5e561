//! Shift-duration histogram over the entire retained shift set.

use crate::models::Shift;
use crate::utils::formatting::{mean, median};

pub const NUM_BINS: usize = 20;
pub const RANGE_HOURS: (f64, f64) = (0.0, 10.0);

pub struct DurationHistogram {
    /// Bin counts over `RANGE_HOURS`, equal width.
    pub counts: Vec<usize>,
    pub mean_hours: f64,
    pub median_hours: f64,
    pub n: usize,
}

impl DurationHistogram {
    pub fn bin_width(&self) -> f64 {
        (RANGE_HOURS.1 - RANGE_HOURS.0) / NUM_BINS as f64
    }

    /// Lower and upper bound of a bin, in hours.
    pub fn bin_bounds(&self, bin: usize) -> (f64, f64) {
        let w = self.bin_width();
        (RANGE_HOURS.0 + bin as f64 * w, RANGE_HOURS.0 + (bin + 1) as f64 * w)
    }
}

/// This analysis is deliberately NOT cohort-restricted: it describes the
/// shape of shifts themselves, not of the cohort.
pub fn compute(shifts: &[Shift]) -> DurationHistogram {
    let durations: Vec<f64> = shifts.iter().map(|s| s.duration_hours()).collect();

    let width = (RANGE_HOURS.1 - RANGE_HOURS.0) / NUM_BINS as f64;
    let mut counts = vec![0usize; NUM_BINS];
    for &h in &durations {
        if h < RANGE_HOURS.0 || h > RANGE_HOURS.1 {
            continue;
        }
        let bin = (((h - RANGE_HOURS.0) / width) as usize).min(NUM_BINS - 1);
        counts[bin] += 1;
    }

    DurationHistogram {
        counts,
        mean_hours: mean(&durations),
        median_hours: median(&durations),
        n: durations.len(),
    }
}
