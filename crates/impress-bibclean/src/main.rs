//! impress-bibclean binary
//!
//! Cleans a reference-manager BibTeX export for sharing.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use impress_bibclean::{clean_path, run, CleanerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "impress-bibclean",
    about = "Strip attachment paths from a BibTeX export, dedupe and sort entries by cite key.",
    version
)]
struct Cli {
    /// Source bibliography. Overrides `source_path` from the config file.
    #[arg(value_name = "SOURCE")]
    source: Option<PathBuf>,
    /// Output file. Defaults to mendeley.bib in the working directory.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// TOML config file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Abort on any character outside ASCII.
    #[arg(long)]
    ascii_only: bool,
    /// Line prefix marking attachment fields.
    #[arg(long, value_name = "PREFIX")]
    prefix: Option<String>,
    /// Only match the prefix at column 0.
    #[arg(long)]
    no_trim_indent: bool,
    /// Print the cleaned bibliography instead of writing the output file.
    #[arg(long)]
    stdout: bool,
    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Result<CleanerConfig> {
        let mut config = match &self.config {
            Some(path) => CleanerConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => CleanerConfig::new(),
        };

        if let Some(source) = self.source {
            config.source_path = Some(source);
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(prefix) = self.prefix {
            config.attachment_prefix = prefix;
        }
        if self.ascii_only {
            config.ascii_only = true;
        }
        if self.no_trim_indent {
            config.trim_indent = false;
        }

        Ok(config)
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Clean per `config`, printing to `out` instead of writing the output file
/// when `to_stdout` is set
fn execute(config: &CleanerConfig, to_stdout: bool, out: &mut impl Write) -> Result<()> {
    if !to_stdout {
        run(config)?;
        return Ok(());
    }

    config.validate()?;
    let source = config
        .source_path
        .as_deref()
        .context("no source bibliography given")?;
    let cleaned = clean_path(source, &config.clean_options(), config.encoding_policy())?;
    out.write_all(cleaned.text.as_bytes()).context("writing to stdout")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let to_stdout = cli.stdout;
    let config = cli.into_config()?;
    execute(&config, to_stdout, &mut std::io::stdout().lock())
}
