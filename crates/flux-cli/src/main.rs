use std::path::PathBuf;

use clap::Parser;

mod bootstrap;
mod cli;
mod output;
mod pipeline;
mod progress;
mod reports;
mod ui;

use flux_db::error::StoreError;
use flux_ingest::error::IngestError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("flux error: {}", describe_error(&error));
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(flags.quiet, flags.format);

    let config = bootstrap::load_config(&cli)?;
    let pipeline = pipeline::StockPipeline::new(
        cli.log_file.clone(),
        cli.catalog.clone(),
        config.storage.db_path.clone(),
        PathBuf::from(&config.reports.dir),
    );

    let summary = pipeline.run().await?;
    output::output(&summary, flags.format)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("STOCKFLUX_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// One diagnostic line naming the failure kind, mirroring how each error
/// class surfaces to the user.
fn describe_error(error: &anyhow::Error) -> String {
    if let Some(ingest) = error.downcast_ref::<IngestError>() {
        return match ingest {
            IngestError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                format!("File not found - {io}")
            }
            other => other.to_string(),
        };
    }

    if let Some(store) = error.downcast_ref::<StoreError>() {
        return format!("storage failure: {store}");
    }

    format!("{error:#}")
}
