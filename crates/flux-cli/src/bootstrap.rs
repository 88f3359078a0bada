use flux_config::FluxConfig;

use crate::cli::Cli;

/// Load configuration and fold in command-line overrides.
///
/// Precedence, lowest to highest: built-in defaults, config files,
/// `STOCKFLUX_*` environment variables, CLI flags.
pub fn load_config(cli: &Cli) -> anyhow::Result<FluxConfig> {
    let config = FluxConfig::load_with_dotenv().map_err(anyhow::Error::from)?;
    Ok(apply_overrides(config, cli))
}

fn apply_overrides(mut config: FluxConfig, cli: &Cli) -> FluxConfig {
    if let Some(db) = &cli.db {
        config.storage.db_path = db.clone();
    }
    if let Some(reports_dir) = &cli.reports_dir {
        config.reports.dir = reports_dir.display().to_string();
    }
    config
}
