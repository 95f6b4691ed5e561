//! Empirical survival (retention) curve for the cohort.
//!
//! No censoring correction: a worker who joined recently and simply has
//! not had time to lapse is treated like a long-tenured one. Known
//! analytical limitation of the source data.

use crate::errors::{AppError, AppResult};
use crate::models::Worker;
use crate::utils::formatting::median;
use std::collections::BTreeMap;

/// One year of day offsets since first contact.
pub const DAYS: usize = 365;

/// A worker "survives" day offset `d` when `days_active >= d`.
pub struct SurvivalCurve {
    /// Fraction of the cohort surviving each day offset, in `[0, 1]`.
    pub frac: Vec<f64>,
    /// Median `days_active` in weeks, over workers active more than 7
    /// days. `None` when nobody passes that cut.
    pub median_weeks_active: Option<f64>,
    /// `frac[DAYS - 1]` as a percentage.
    pub one_year_pct: f64,
    pub n_cohort: usize,
}

pub fn compute(workers: &BTreeMap<u32, Worker>, cohort: &[u32]) -> AppResult<SurvivalCurve> {
    if cohort.is_empty() {
        return Err(AppError::EmptyCohort);
    }

    let days_active: Vec<i64> = cohort
        .iter()
        .filter_map(|id| workers.get(id))
        .map(|w| w.days_active)
        .collect();
    let n = days_active.len();

    let mut frac = Vec::with_capacity(DAYS);
    for d in 0..DAYS as i64 {
        let surviving = days_active.iter().filter(|&&a| a >= d).count();
        frac.push(surviving as f64 / n as f64);
    }

    let long_haul: Vec<f64> = days_active
        .iter()
        .filter(|&&a| a > 7)
        .map(|&a| a as f64)
        .collect();
    let median_weeks_active = if long_haul.is_empty() {
        None
    } else {
        Some(median(&long_haul) / 7.0)
    };

    let one_year_pct = frac[DAYS - 1] * 100.0;

    Ok(SurvivalCurve {
        frac,
        median_weeks_active,
        one_year_pct,
        n_cohort: n,
    })
}
