use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Output format for the run summary printed after the pipeline finishes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Top-level CLI parser for the `flux` binary.
///
/// One invocation runs the whole pipeline; there are no partial-stage
/// subcommands.
#[derive(Debug, Parser)]
#[command(
    name = "flux",
    version,
    about = "stockflux - transaction log ingestion and stock-change reports"
)]
pub struct Cli {
    /// Transaction log file to ingest
    pub log_file: PathBuf,

    /// Catalog seed file (tab-separated: title, sku, value)
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Database file path (overrides config)
    #[arg(long)]
    pub db: Option<String>,

    /// Report output directory (overrides config)
    #[arg(long)]
    pub reports_dir: Option<PathBuf>,

    /// Summary format: human, json
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Quiet mode (suppress progress output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Extract the presentation flags the rest of the run needs.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
        }
    }
}

/// Ergonomic bundle of presentation flags.
#[derive(Clone, Copy, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_parse_before_the_positional() {
        let cli = Cli::try_parse_from([
            "flux",
            "--format",
            "json",
            "--quiet",
            "--db",
            "/tmp/stock.db",
            "transactions.log",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.quiet);
        assert_eq!(cli.db.as_deref(), Some("/tmp/stock.db"));
        assert_eq!(cli.log_file.to_str(), Some("transactions.log"));
    }

    #[test]
    fn flags_parse_after_the_positional() {
        let cli = Cli::try_parse_from([
            "flux",
            "transactions.log",
            "--catalog",
            "shop_list.tsv",
            "--reports-dir",
            "out",
        ])
        .expect("cli should parse");

        assert_eq!(cli.catalog.as_deref(), Some(std::path::Path::new("shop_list.tsv")));
        assert_eq!(cli.reports_dir.as_deref(), Some(std::path::Path::new("out")));
    }

    #[test]
    fn log_file_is_required() {
        assert!(Cli::try_parse_from(["flux"]).is_err());
    }

    #[test]
    fn format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["flux", "--format", "xml", "transactions.log"]).is_err());
    }

    #[test]
    fn format_defaults_to_human() {
        let cli = Cli::try_parse_from(["flux", "transactions.log"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Human);
        assert!(!cli.quiet);
    }
}
