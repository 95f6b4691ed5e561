//! Terminal rendering of the analysis results. One render function per
//! analysis; the report command prints them in pipeline order.

pub mod chart;

use crate::analysis::histogram::DurationHistogram;
use crate::analysis::monthly::MonthlySeries;
use crate::analysis::survival::{DAYS, SurvivalCurve};
use crate::analysis::weekly::WeeklyActivity;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_percentage};
use crate::utils::date::delta_month;
use crate::utils::formatting::bold;
use ansi_term::Colour;
use chart::ChartRow;

pub fn render_histogram(h: &DurationHistogram, width: usize) {
    header("Shift duration");

    let rows: Vec<ChartRow> = h
        .counts
        .iter()
        .enumerate()
        .map(|(bin, &count)| {
            let (lo, hi) = h.bin_bounds(bin);
            ChartRow::new(format!("{:.1}-{:.1}h", lo, hi), count as f64)
        })
        .collect();

    print!("{}", chart::render(&rows, width, Colour::Cyan, ""));
    println!();
    println!("Shifts:              {}", h.n);
    println!("Mean shift length:   {}", bold(&format!("{:.2} h", h.mean_hours)));
    println!("Median shift length: {}", bold(&format!("{:.2} h", h.median_hours)));
    println!();
}

pub fn render_missing(count: usize) {
    header("Missing work records");
    println!("{} volunteers without a work record.", bold(&count.to_string()));
    println!();
}

pub fn render_monthly(s: &MonthlySeries, width: usize) -> AppResult<()> {
    header("Hours logged per month");

    let mut rows = Vec::with_capacity(s.hours.len());
    for (m, &h) in s.hours.iter().enumerate() {
        let label = delta_month(s.anchor, m as u32)?.format("%Y-%m").to_string();
        rows.push(ChartRow::new(label, h));
    }

    print!("{}", chart::render(&rows, width, Colour::Green, "h"));
    println!();
    println!(
        "Total: {} visits, {:.0} hours over {} months",
        s.visits.iter().sum::<usize>(),
        s.hours.iter().sum::<f64>(),
        s.hours.len()
    );
    println!();
    Ok(())
}

pub fn render_survival(c: &SurvivalCurve, width: usize) {
    header("Survival after first shift");

    // One row per week keeps 365 daily points readable on a terminal.
    let rows: Vec<ChartRow> = (0..=DAYS / 7)
        .map(|wk| {
            let d = (wk * 7).min(DAYS - 1);
            ChartRow::new(format!("wk {:>2}", wk), c.frac[d] * 100.0)
        })
        .collect();

    print!("{}", chart::render(&rows, width, Colour::Yellow, "%"));
    println!();
    println!("Cohort size: {}", c.n_cohort);
    match c.median_weeks_active {
        Some(weeks) => println!(
            "Median time involved (active > 7 days): {}",
            bold(&format!("{:.1} weeks", weeks))
        ),
        None => println!("Median time involved: no volunteer active beyond 7 days"),
    }
    println!(
        "Involved after 1 year: {}{:.1}%{}",
        color_for_percentage(c.one_year_pct),
        c.one_year_pct,
        RESET
    );
    println!();
}

pub fn render_weekly(w: &WeeklyActivity, width: usize) {
    header("Active during week");
    let rows: Vec<ChartRow> = w
        .active_pct
        .iter()
        .enumerate()
        .map(|(wk, &pct)| ChartRow::new(format!("wk {:>2}", wk), pct))
        .collect();
    print!("{}", chart::render(&rows, width, Colour::Yellow, "%"));
    println!();

    header("Hours per week");
    let rows: Vec<ChartRow> = w
        .hours
        .iter()
        .enumerate()
        .map(|(wk, &h)| ChartRow::new(format!("wk {:>2}", wk), h))
        .collect();
    print!("{}", chart::render(&rows, width, Colour::Green, "h"));
    println!();
    println!("Averaged over {} cohort members.", w.n_cohort);
    println!();
}
