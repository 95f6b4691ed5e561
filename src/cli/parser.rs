use crate::export::{AnalysisKind, ExportFormat};
use clap::{Parser, Subcommand};

/// Command-line interface definition for voldrop
/// CLI application to analyze volunteer attendance and drop-off
#[derive(Parser)]
#[command(
    name = "voldrop",
    version = env!("CARGO_PKG_VERSION"),
    about = "Analyze volunteer attendance, engagement and drop-off from VTracklery CSV exports",
    long_about = None
)]
pub struct Cli {
    /// Override workers table path (useful for tests or custom exports)
    #[arg(global = true, long = "workers")]
    pub workers: Option<String>,

    /// Override hours table path
    #[arg(global = true, long = "shifts")]
    pub shifts: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration directory and default config file
    Init,

    /// Manage the configuration file (view or validate)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for invalid fields")]
        check: bool,
    },

    /// Run the analysis pipeline and print the selected reports
    Report {
        #[arg(long, help = "Shift-duration histogram with mean/median")]
        histogram: bool,

        #[arg(long, help = "Count volunteers without any work record")]
        missing: bool,

        #[arg(long, help = "Hours and visits aggregated per calendar month")]
        monthly: bool,

        #[arg(long, help = "Survival curve for the cohort")]
        survival: bool,

        #[arg(long, help = "Average weekly activity over the first year")]
        weekly: bool,

        #[arg(long, help = "Run every analysis")]
        all: bool,
    },

    /// Export a computed analysis series to a file
    Export {
        #[arg(long, value_enum)]
        analysis: AnalysisKind,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
