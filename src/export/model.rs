// src/export/model.rs

use crate::analysis::histogram::DurationHistogram;
use crate::analysis::monthly::MonthlySeries;
use crate::analysis::survival::SurvivalCurve;
use crate::analysis::weekly::WeeklyActivity;
use crate::errors::AppResult;
use crate::utils::date::delta_month;
use serde::Serialize;

/// Flat row shapes for CSV / JSON export, one struct per analysis.

#[derive(Serialize, Clone, Debug)]
pub struct HistogramRow {
    pub bin: usize,
    pub lower_hours: f64,
    pub upper_hours: f64,
    pub count: usize,
}

#[derive(Serialize, Clone, Debug)]
pub struct MonthlyRow {
    pub month_offset: usize,
    pub month: String,
    pub visits: usize,
    pub hours: f64,
}

#[derive(Serialize, Clone, Debug)]
pub struct SurvivalRow {
    pub day: usize,
    pub weeks: f64,
    pub surviving_pct: f64,
}

#[derive(Serialize, Clone, Debug)]
pub struct WeeklyRow {
    pub week: usize,
    pub active_pct: f64,
    pub hours: f64,
}

pub(crate) fn histogram_rows(h: &DurationHistogram) -> Vec<HistogramRow> {
    h.counts
        .iter()
        .enumerate()
        .map(|(bin, &count)| {
            let (lower_hours, upper_hours) = h.bin_bounds(bin);
            HistogramRow {
                bin,
                lower_hours,
                upper_hours,
                count,
            }
        })
        .collect()
}

pub(crate) fn monthly_rows(s: &MonthlySeries) -> AppResult<Vec<MonthlyRow>> {
    let mut rows = Vec::with_capacity(s.visits.len());
    for (m, (&visits, &hours)) in s.visits.iter().zip(s.hours.iter()).enumerate() {
        rows.push(MonthlyRow {
            month_offset: m,
            month: delta_month(s.anchor, m as u32)?.format("%Y-%m").to_string(),
            visits,
            hours,
        });
    }
    Ok(rows)
}

pub(crate) fn survival_rows(c: &SurvivalCurve) -> Vec<SurvivalRow> {
    c.frac
        .iter()
        .enumerate()
        .map(|(day, &f)| SurvivalRow {
            day,
            weeks: day as f64 / 7.0,
            surviving_pct: f * 100.0,
        })
        .collect()
}

pub(crate) fn weekly_rows(w: &WeeklyActivity) -> Vec<WeeklyRow> {
    w.active_pct
        .iter()
        .zip(w.hours.iter())
        .enumerate()
        .map(|(week, (&active_pct, &hours))| WeeklyRow {
            week,
            active_pct,
            hours,
        })
        .collect()
}
