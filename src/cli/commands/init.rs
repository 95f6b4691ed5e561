use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the default configuration file (skipped in test mode)
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.test)?;

    let path = Config::config_file();
    let cfg = Config::load();

    println!("⚙️  Initializing voldrop…");
    println!("📄 Config file : {}", path.display());
    println!("👥 Workers     : {}", cfg.workers_file);
    println!("🕒 Shifts      : {}", cfg.shifts_file);
    println!(
        "📅 Cohort      : {} .. {}",
        cfg.cohort_start, cfg.cohort_end
    );

    println!("🎉 voldrop initialization completed!");
    Ok(())
}
