//! Analysis pipeline: load -> derive engagement -> cohort, then the
//! individual analyses on top of the shared [`Dataset`].

pub mod cohort;
pub mod engagement;
pub mod histogram;
pub mod missing;
pub mod monthly;
pub mod survival;
pub mod weekly;

use crate::config::Config;
use crate::errors::AppResult;
use crate::ingest;
use crate::models::{DurationLimits, Shift, Worker};
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;
use std::collections::BTreeMap;

/// The two in-memory tables plus the derived cohort. Built once at
/// startup; read-only for every analysis afterwards.
pub struct Dataset {
    pub workers: BTreeMap<u32, Worker>,
    pub shifts: Vec<Shift>,
    pub cohort: Vec<u32>,
}

impl Dataset {
    /// Run the front of the pipeline and report the cohort size.
    pub fn load(cfg: &Config) -> AppResult<Self> {
        let limits = DurationLimits {
            min_secs: cfg.min_shift_secs,
            max_secs: cfg.max_shift_secs,
        };

        let mut workers = ingest::load_workers(&expand_tilde(&cfg.workers_file))?;
        let shifts = ingest::load_shifts(&expand_tilde(&cfg.shifts_file), limits)?;

        engagement::derive_engagement(&mut workers, &shifts);

        let (start, end) = cfg.cohort_window()?;
        let cohort = cohort::select_cohort(&workers, start, end);

        info(format!(
            "{} volunteers, {} retained shifts, {} in cohort ({} .. {})",
            workers.len(),
            shifts.len(),
            cohort.len(),
            cfg.cohort_start,
            cfg.cohort_end
        ));

        Ok(Self {
            workers,
            shifts,
            cohort,
        })
    }
}
