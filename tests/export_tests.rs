use predicates::str::contains;
use std::fs;

mod common;
use common::{temp_path, vd, write_fixture_tables};

#[test]
fn test_export_survival_csv() {
    let (workers, shifts) = write_fixture_tables("export_survival_csv");
    let out = temp_path("survival", "csv");

    vd()
        .args([
            "--workers",
            &workers,
            "--shifts",
            &shifts,
            "--test",
            "export",
            "--analysis",
            "survival",
            "--format",
            "csv",
            "--file",
            &out,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("day,weeks,surviving_pct"));
    // day 0: everyone in the cohort survives
    assert_eq!(lines.next(), Some("0,0.0,100.0"));
    // 365 data rows + header
    assert_eq!(content.lines().count(), 366);
}

#[test]
fn test_export_weekly_json() {
    let (workers, shifts) = write_fixture_tables("export_weekly_json");
    let out = temp_path("weekly", "json");

    vd()
        .args([
            "--workers",
            &workers,
            "--shifts",
            &shifts,
            "--test",
            "export",
            "--analysis",
            "weekly",
            "--format",
            "json",
            "--file",
            &out,
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("parse json");
    let rows = rows.as_array().expect("array of rows");

    assert_eq!(rows.len(), 52);
    assert_eq!(rows[0]["week"], 0);
    assert_eq!(rows[0]["active_pct"], 100.0);
}

#[test]
fn test_export_histogram_row_count() {
    let (workers, shifts) = write_fixture_tables("export_histogram");
    let out = temp_path("histogram", "csv");

    vd()
        .args([
            "--workers",
            &workers,
            "--shifts",
            &shifts,
            "--test",
            "export",
            "--analysis",
            "histogram",
            "--file",
            &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    // header + 20 bins
    assert_eq!(content.lines().count(), 21);
}

#[test]
fn test_export_rejects_relative_path() {
    let (workers, shifts) = write_fixture_tables("export_relative");

    vd()
        .args([
            "--workers",
            &workers,
            "--shifts",
            &shifts,
            "--test",
            "export",
            "--analysis",
            "monthly",
            "--file",
            "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let (workers, shifts) = write_fixture_tables("export_force");
    let out = temp_path("force", "csv");
    fs::write(&out, "stale").expect("seed existing file");

    vd()
        .args([
            "--workers",
            &workers,
            "--shifts",
            &shifts,
            "--test",
            "export",
            "--analysis",
            "monthly",
            "--file",
            &out,
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("month_offset,month,visits,hours"));
}
