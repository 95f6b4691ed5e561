use crate::analysis::Dataset;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

/// Handle the `export` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        analysis,
        format,
        file,
        force,
    } = cmd
    {
        let dataset = Dataset::load(cfg)?;
        ExportLogic::export(
            &dataset,
            cfg,
            analysis.clone(),
            format.clone(),
            file,
            *force,
        )?;
    }
    Ok(())
}
