use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                println!("📄 {}\n", path.display());
                println!("{content}");
            } else {
                warning(format!(
                    "No config file at {} (defaults in effect). Run `voldrop init` to create one.",
                    path.display()
                ));
                let yaml = serde_yaml::to_string(cfg)
                    .map_err(|e| AppError::Config(e.to_string()))?;
                println!("{yaml}");
            }
        }

        if *check {
            cfg.check()?;
            success("Configuration is valid.");
        }

        if !*print_config && !*check {
            warning("Nothing to do: pass --print or --check.");
        }
    }
    Ok(())
}
