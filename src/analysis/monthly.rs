//! Monthly aggregation of visits and logged hours.

use crate::errors::AppResult;
use crate::models::Shift;
use crate::utils::date::delta_month;
use chrono::NaiveDateTime;

pub struct MonthlySeries {
    pub anchor: NaiveDateTime,
    /// Shifts starting in each month bucket, indexed by month offset.
    pub visits: Vec<usize>,
    /// Total hours of those shifts.
    pub hours: Vec<f64>,
}

/// Bucket the shift table into `months` consecutive calendar months
/// starting at `anchor`. Each bucket is half-open: a shift belongs to
/// month `m` when `delta_month(anchor, m) <= start < delta_month(anchor, m+1)`.
pub fn compute(shifts: &[Shift], anchor: NaiveDateTime, months: u32) -> AppResult<MonthlySeries> {
    let mut visits = Vec::with_capacity(months as usize);
    let mut hours = Vec::with_capacity(months as usize);

    for m in 0..months {
        let t1 = delta_month(anchor, m)?;
        let t2 = delta_month(anchor, m + 1)?;

        let in_month: Vec<&Shift> = shifts
            .iter()
            .filter(|s| s.start >= t1 && s.start < t2)
            .collect();

        visits.push(in_month.len());
        hours.push(in_month.iter().map(|s| s.duration_hours()).sum());
    }

    Ok(MonthlySeries {
        anchor,
        visits,
        hours,
    })
}
