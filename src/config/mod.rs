use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Workers table exported from VTracklery (CSV, no header)
    pub workers_file: String,
    /// Hours table exported from VTracklery (CSV, no header)
    pub shifts_file: String,
    /// Cohort join window, half-open [start, end)
    pub cohort_start: String,
    pub cohort_end: String,
    /// Shift validity bounds in seconds (strict: d > min and d < max)
    #[serde(default = "default_min_shift_secs")]
    pub min_shift_secs: i64,
    #[serde(default = "default_max_shift_secs")]
    pub max_shift_secs: i64,
    /// Anchor date for the monthly aggregation
    #[serde(default = "default_monthly_anchor")]
    pub monthly_anchor: String,
    #[serde(default = "default_monthly_months")]
    pub monthly_months: u32,
    /// Width of terminal charts, in cells
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_min_shift_secs() -> i64 {
    10 * 60
}
fn default_max_shift_secs() -> i64 {
    3600 * 10
}
fn default_monthly_anchor() -> String {
    "2008-09-01".to_string()
}
fn default_monthly_months() -> u32 {
    8 * 12
}
fn default_chart_width() -> usize {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workers_file: "workers.csv".to_string(),
            shifts_file: "hours.csv".to_string(),
            cohort_start: "2008-09-01".to_string(),
            cohort_end: "2012-08-31".to_string(),
            min_shift_secs: default_min_shift_secs(),
            max_shift_secs: default_max_shift_secs(),
            monthly_anchor: default_monthly_anchor(),
            monthly_months: default_monthly_months(),
            chart_width: default_chart_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("voldrop")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".voldrop")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("voldrop.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize the configuration directory and file
    pub fn init_all(is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();

        if !is_test {
            let yaml = serde_yaml::to_string(&config).unwrap();
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(())
    }

    /// Cohort window bounds as midnight timestamps, half-open.
    pub fn cohort_window(&self) -> AppResult<(NaiveDateTime, NaiveDateTime)> {
        let start = parse_midnight(&self.cohort_start)?;
        let end = parse_midnight(&self.cohort_end)?;
        if start >= end {
            return Err(AppError::Config(format!(
                "cohort_start {} is not before cohort_end {}",
                self.cohort_start, self.cohort_end
            )));
        }
        Ok((start, end))
    }

    pub fn monthly_anchor_date(&self) -> AppResult<NaiveDateTime> {
        parse_midnight(&self.monthly_anchor)
    }

    /// Validate fields that cannot be checked by serde alone.
    pub fn check(&self) -> AppResult<()> {
        self.cohort_window()?;
        self.monthly_anchor_date()?;
        if self.min_shift_secs >= self.max_shift_secs {
            return Err(AppError::Config(format!(
                "min_shift_secs {} is not below max_shift_secs {}",
                self.min_shift_secs, self.max_shift_secs
            )));
        }
        if self.chart_width < 10 {
            return Err(AppError::Config("chart_width below 10".to_string()));
        }
        Ok(())
    }
}

fn parse_midnight(s: &str) -> AppResult<NaiveDateTime> {
    crate::utils::date::parse_date(s)
        .map(|d| d.and_hms_opt(0, 0, 0).unwrap())
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))
}
