// src/export/logic.rs

use crate::analysis::{Dataset, histogram, monthly, survival, weekly};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model;
use crate::export::{AnalysisKind, ExportFormat};
use serde::Serialize;
use std::io;
use std::path::Path;

/// High-level export logic: compute one analysis and write its series.
pub struct ExportLogic;

impl ExportLogic {
    /// - `kind`: which analysis series to compute
    /// - `format`: "csv" | "json"
    /// - `file`: absolute path of the output file
    pub fn export(
        dataset: &Dataset,
        cfg: &Config,
        kind: AnalysisKind,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        match kind {
            AnalysisKind::Histogram => {
                let h = histogram::compute(&dataset.shifts);
                write_rows(&model::histogram_rows(&h), format, path)
            }
            AnalysisKind::Monthly => {
                let s = monthly::compute(
                    &dataset.shifts,
                    cfg.monthly_anchor_date()?,
                    cfg.monthly_months,
                )?;
                write_rows(&model::monthly_rows(&s)?, format, path)
            }
            AnalysisKind::Survival => {
                let c = survival::compute(&dataset.workers, &dataset.cohort)?;
                write_rows(&model::survival_rows(&c), format, path)
            }
            AnalysisKind::Weekly => {
                let w = weekly::compute(&dataset.workers, &dataset.cohort, &dataset.shifts)?;
                write_rows(&model::weekly_rows(&w), format, path)
            }
        }
    }
}

fn write_rows<T: Serialize>(rows: &[T], format: ExportFormat, path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Json => export_json(rows, path),
    }
}
