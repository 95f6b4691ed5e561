use crate::errors::{AppError, AppResult};
use crate::utils::date::{days_between, parse_timestamp};
use chrono::NaiveDateTime;
use csv::StringRecord;

/// Columns consumed from the VTracklery workers table.
const COL_ID: usize = 0;
const COL_NAME: usize = 1;
const COL_JOIN_DATE: usize = 6;

/// One volunteer, as loaded from the workers table plus the engagement
/// fields derived from their shifts.
#[derive(Debug, Clone)]
pub struct Worker {
    pub id: u32,
    pub name: String,
    pub join_date: NaiveDateTime,
    pub first_shift: Option<NaiveDateTime>,
    pub latest_shift: Option<NaiveDateTime>,
    pub days_active: i64,
}

impl Worker {
    /// Decode one workers-table row. Fails fast with the source line
    /// number on short rows or unparseable fields.
    pub fn from_record(record: &StringRecord, line: u64) -> AppResult<Self> {
        let field = |idx: usize| {
            record.get(idx).ok_or_else(|| AppError::WorkerRecord {
                line,
                msg: format!("expected at least {} columns, got {}", idx + 1, record.len()),
            })
        };

        let id = field(COL_ID)?.trim().parse::<u32>().map_err(|e| {
            AppError::WorkerRecord {
                line,
                msg: format!("worker id: {e}"),
            }
        })?;
        let name = field(COL_NAME)?.to_string();
        let join_date = parse_timestamp(field(COL_JOIN_DATE)?).map_err(|e| {
            AppError::WorkerRecord {
                line,
                msg: format!("join date: {e}"),
            }
        })?;

        Ok(Self {
            id,
            name,
            join_date,
            first_shift: None,
            latest_shift: None,
            days_active: 0,
        })
    }

    pub fn has_shifts(&self) -> bool {
        self.first_shift.is_some()
    }

    /// Set the engagement fields from the extremes of this worker's
    /// shift starts. Called once by the engagement deriver.
    pub fn set_engagement(&mut self, first: NaiveDateTime, latest: NaiveDateTime) {
        self.first_shift = Some(first);
        self.latest_shift = Some(latest);
        self.days_active = days_between(first, latest);
    }
}
