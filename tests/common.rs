#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn vd() -> Command {
    cargo_bin_cmd!("voldrop")
}

/// Create a unique file path inside the system temp dir and remove any
/// existing file
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_voldrop.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write the standard fixture tables and return (workers_path, shifts_path).
///
/// Worker 1 joins 2009-01-01 with shifts on 2009-01-05 and 2009-03-01
/// (55 whole days apart, inside the default cohort window).
/// Worker 2 joins 2013-01-01 (outside the window) with one shift.
/// Worker 3 joins 2009-06-01 and never logs a shift.
///
/// The hours table also carries rows that the loader must drop: an open
/// session (empty end), a 10-minute shift (at the exclusive lower bound)
/// and a 10-hour shift (at the exclusive upper bound).
pub fn write_fixture_tables(name: &str) -> (String, String) {
    let workers = temp_path(&format!("{name}_workers"), "csv");
    let shifts = temp_path(&format!("{name}_shifts"), "csv");

    fs::write(
        &workers,
        "1,Ada,x,x,x,x,2009-01-01 00:00:00 +0000\n\
         2,Grace,x,x,x,x,2013-01-01 08:00:00\n\
         3,Linus,x,x,x,x,2009-06-01 12:30:00\n",
    )
    .expect("write workers fixture");

    fs::write(
        &shifts,
        "2009-01-05 09:00:00,2009-01-05 11:00:00,1\n\
         2009-03-01 09:00:00,2009-03-01 10:30:00,1\n\
         2009-04-01 09:00:00,,1\n\
         2009-04-02 09:00:00,2009-04-02 09:10:00,1\n\
         2009-04-03 09:00:00,2009-04-03 19:00:00,1\n\
         2013-02-01 10:00:00,2013-02-01 12:00:00,2\n",
    )
    .expect("write shifts fixture");

    (workers, shifts)
}
