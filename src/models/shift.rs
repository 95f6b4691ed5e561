use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_timestamp;
use chrono::NaiveDateTime;
use csv::StringRecord;

/// Columns consumed from the VTracklery hours table.
const COL_START: usize = 0;
const COL_END: usize = 1;
const COL_WORKER_ID: usize = 2;

/// Shift validity bounds, strict on both sides.
#[derive(Debug, Clone, Copy)]
pub struct DurationLimits {
    pub min_secs: i64,
    pub max_secs: i64,
}

impl DurationLimits {
    /// Shorter records are accidental clock-ins, longer ones implausible
    /// for one continuous session.
    pub fn accepts(&self, duration_secs: i64) -> bool {
        duration_secs > self.min_secs && duration_secs < self.max_secs
    }
}

/// One logged work session. Immutable after load.
#[derive(Debug, Clone)]
pub struct Shift {
    pub worker_id: u32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_secs: i64,
}

impl Shift {
    /// Decode one hours-table row.
    ///
    /// Returns `Ok(None)` for rows dropped by policy: an empty end
    /// timestamp (open session), or a duration outside `limits`. Real
    /// decode failures carry the source line number.
    pub fn from_record(
        record: &StringRecord,
        line: u64,
        limits: DurationLimits,
    ) -> AppResult<Option<Self>> {
        let field = |idx: usize| {
            record.get(idx).ok_or_else(|| AppError::ShiftRecord {
                line,
                msg: format!("expected at least {} columns, got {}", idx + 1, record.len()),
            })
        };

        let start_raw = field(COL_START)?;
        let end_raw = field(COL_END)?;
        let id_raw = field(COL_WORKER_ID)?;

        // Open sessions have no end timestamp; skip the row entirely.
        if end_raw.trim().is_empty() {
            return Ok(None);
        }

        let start = parse_timestamp(start_raw).map_err(|e| AppError::ShiftRecord {
            line,
            msg: format!("start: {e}"),
        })?;
        let end = parse_timestamp(end_raw).map_err(|e| AppError::ShiftRecord {
            line,
            msg: format!("end: {e}"),
        })?;
        let worker_id = id_raw.trim().parse::<u32>().map_err(|e| {
            AppError::ShiftRecord {
                line,
                msg: format!("worker id: {e}"),
            }
        })?;

        let duration_secs = (end - start).num_seconds();
        if !limits.accepts(duration_secs) {
            return Ok(None);
        }

        Ok(Some(Self {
            worker_id,
            start,
            end,
            duration_secs,
        }))
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_secs as f64 / 3600.0
    }
}
