//! Data loader: reads the two VTracklery CSV exports into memory.
//!
//! Both files are headerless with positional columns. The workers table
//! loads into a map keyed by id (last record wins on duplicates); the
//! hours table loads into a vector kept in file order after the policy
//! filters in [`Shift::from_record`].

use crate::errors::AppResult;
use crate::models::{DurationLimits, Shift, Worker};
use csv::ReaderBuilder;
use std::collections::BTreeMap;
use std::path::Path;

fn reader(path: &Path) -> AppResult<csv::Reader<std::fs::File>> {
    Ok(ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?)
}

pub fn load_workers(path: &Path) -> AppResult<BTreeMap<u32, Worker>> {
    let mut rdr = reader(path)?;
    let mut workers = BTreeMap::new();

    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let worker = Worker::from_record(&record, line)?;
        workers.insert(worker.id, worker);
    }

    Ok(workers)
}

pub fn load_shifts(path: &Path, limits: DurationLimits) -> AppResult<Vec<Shift>> {
    let mut rdr = reader(path)?;
    let mut shifts = Vec::new();

    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        if let Some(shift) = Shift::from_record(&record, line, limits)? {
            shifts.push(shift);
        }
    }

    Ok(shifts)
}
