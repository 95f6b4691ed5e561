use crate::analysis::{Dataset, histogram, missing, monthly, survival, weekly};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::report;

/// Handle the `report` subcommand: run the pipeline once, then the
/// selected analyses in order. With no selection only the pipeline
/// summary (cohort size) is printed.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        histogram: r_hist,
        missing: r_missing,
        monthly: r_monthly,
        survival: r_survival,
        weekly: r_weekly,
        all,
    } = cmd
    {
        let dataset = Dataset::load(cfg)?;
        let width = cfg.chart_width;

        if *r_hist || *all {
            let h = histogram::compute(&dataset.shifts);
            report::render_histogram(&h, width);
        }

        if *r_missing || *all {
            let n = missing::count_missing(&dataset.workers);
            report::render_missing(n);
        }

        if *r_monthly || *all {
            let s = monthly::compute(
                &dataset.shifts,
                cfg.monthly_anchor_date()?,
                cfg.monthly_months,
            )?;
            report::render_monthly(&s, width)?;
        }

        if *r_survival || *all {
            let c = survival::compute(&dataset.workers, &dataset.cohort)?;
            report::render_survival(&c, width);
        }

        if *r_weekly || *all {
            let w = weekly::compute(&dataset.workers, &dataset.cohort, &dataset.shifts)?;
            report::render_weekly(&w, width);
        }
    }
    Ok(())
}
