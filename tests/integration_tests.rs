use predicates::str::contains;

mod common;
use common::{vd, write_fixture_tables};

#[test]
fn test_report_prints_cohort_summary() {
    let (workers, shifts) = write_fixture_tables("cohort_summary");

    vd()
        .args([
            "--workers", &workers, "--shifts", &shifts, "--test", "report",
        ])
        .assert()
        .success()
        .stdout(contains("1 in cohort"))
        .stdout(contains("3 volunteers"));
}

#[test]
fn test_report_missing_counts_zero_shift_workers() {
    let (workers, shifts) = write_fixture_tables("missing");

    vd()
        .args([
            "--workers",
            &workers,
            "--shifts",
            &shifts,
            "--test",
            "report",
            "--missing",
        ])
        .assert()
        .success()
        .stdout(contains("volunteers without a work record."));
}

#[test]
fn test_report_histogram_stats() {
    let (workers, shifts) = write_fixture_tables("histogram");

    // Retained: 2h, 1.5h and 2h shifts -> mean 1.83, median 2.00
    vd()
        .args([
            "--workers",
            &workers,
            "--shifts",
            &shifts,
            "--test",
            "report",
            "--histogram",
        ])
        .assert()
        .success()
        .stdout(contains("Mean shift length:"))
        .stdout(contains("1.83"))
        .stdout(contains("Median shift length:"))
        .stdout(contains("2.00"));
}

#[test]
fn test_report_all_runs_every_analysis() {
    let (workers, shifts) = write_fixture_tables("report_all");

    vd()
        .args([
            "--workers",
            &workers,
            "--shifts",
            &shifts,
            "--test",
            "report",
            "--all",
        ])
        .assert()
        .success()
        .stdout(contains("Shift duration"))
        .stdout(contains("Missing work records"))
        .stdout(contains("Hours logged per month"))
        .stdout(contains("Survival after first shift"))
        .stdout(contains("Hours per week"));
}

#[test]
fn test_report_survival_one_year_retention() {
    let (workers, shifts) = write_fixture_tables("survival");

    // The single cohort member was active 55 days, not a full year.
    vd()
        .args([
            "--workers",
            &workers,
            "--shifts",
            &shifts,
            "--test",
            "report",
            "--survival",
        ])
        .assert()
        .success()
        .stdout(contains("Cohort size: 1"))
        .stdout(contains("Involved after 1 year:"));
}

#[test]
fn test_missing_workers_file_fails() {
    let (_, shifts) = write_fixture_tables("missing_file");

    vd()
        .args([
            "--workers",
            "/nonexistent/workers.csv",
            "--shifts",
            &shifts,
            "--test",
            "report",
        ])
        .assert()
        .failure()
        .stderr(contains("Error:"));
}

#[test]
fn test_malformed_worker_row_reports_line() {
    let workers = common::temp_path("bad_workers", "csv");
    let (_, shifts) = write_fixture_tables("bad_worker_row");
    std::fs::write(&workers, "1,Ada,x,x,x,x,2009-01-01 00:00:00\nnot-a-number,Bob\n")
        .expect("write fixture");

    vd()
        .args([
            "--workers", &workers, "--shifts", &shifts, "--test", "report",
        ])
        .assert()
        .failure()
        .stderr(contains("line 2"));
}

#[test]
fn test_malformed_shift_timestamp_fails() {
    let (workers, _) = write_fixture_tables("bad_shift_row");
    let shifts = common::temp_path("bad_shifts", "csv");
    std::fs::write(&shifts, "2009-01-05 09:00:00,yesterday evening,1\n").expect("write fixture");

    vd()
        .args([
            "--workers", &workers, "--shifts", &shifts, "--test", "report",
        ])
        .assert()
        .failure()
        .stderr(contains("Bad shift record"));
}

#[test]
fn test_config_check_reports_valid_defaults() {
    vd()
        .args(["--test", "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration is valid."));
}
