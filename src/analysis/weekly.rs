//! Average weekly activity profile over the first year of engagement.
//!
//! Both series are true cohort averages: every worker's 52-week profile
//! is accumulated, then divided by the cohort size.

use crate::errors::{AppError, AppResult};
use crate::models::{Shift, Worker};
use crate::utils::date::week_window;
use std::collections::BTreeMap;

pub const NUM_WEEKS: usize = 52;

pub struct WeeklyActivity {
    /// Percentage of the cohort with any logged hours in week `wk`
    /// relative to their own first shift. Each value in `[0, 100]`.
    pub active_pct: Vec<f64>,
    /// Average hours logged per cohort member in that relative week.
    pub hours: Vec<f64>,
    pub n_cohort: usize,
}

pub fn compute(
    workers: &BTreeMap<u32, Worker>,
    cohort: &[u32],
    shifts: &[Shift],
) -> AppResult<WeeklyActivity> {
    if cohort.is_empty() {
        return Err(AppError::EmptyCohort);
    }
    let n = cohort.len() as f64;

    let mut active_pct = vec![0.0; NUM_WEEKS];
    let mut hours = vec![0.0; NUM_WEEKS];

    for id in cohort {
        let Some(worker) = workers.get(id) else {
            continue;
        };
        // Cohort membership implies a first shift.
        let Some(first) = worker.first_shift else {
            continue;
        };

        for wk in 0..NUM_WEEKS {
            let (wk_start, wk_end) = week_window(first, wk as u64);

            let h_wk: f64 = shifts
                .iter()
                .filter(|s| s.worker_id == *id && s.start >= wk_start && s.start < wk_end)
                .map(|s| s.duration_hours())
                .sum();

            if h_wk > 0.0 {
                active_pct[wk] += 100.0 / n;
            }
            hours[wk] += h_wk / n;
        }
    }

    Ok(WeeklyActivity {
        active_pct,
        hours,
        n_cohort: cohort.len(),
    })
}
