//! Command-line interface.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crate::ingestion::{JsonpExtraction, LoadOptions, TracingObserver};
use crate::pipeline::{run_csv, run_jsonp, CsvSummaryOptions, JsonpSummaryOptions};
use crate::processing::{StatMethod, DEFAULT_ITERATIONS};

#[derive(Debug, Parser)]
#[command(name = "rarefaction-summary")]
#[command(about = "Summarise rarefaction curve data into a depth table (TSV)", version)]
pub struct Cli {
    /// Increase verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Median or mean per depth from a per-iteration CSV
    Csv(CsvArgs),
    /// Mean per group and depth from a JSONP file
    Jsonp(JsonpArgs),
}

#[derive(Debug, Args)]
struct CsvArgs {
    /// CSV file obtained from the rarefaction curve data
    #[arg(long = "csv")]
    csv: PathBuf,
    /// Output path prefix; the table is written to <PREFIX>.tsv
    #[arg(long = "out-prefix", value_name = "PREFIX")]
    out_prefix: PathBuf,
    /// Number of rarefaction iterations for each depth
    #[arg(
        long,
        default_value_t = DEFAULT_ITERATIONS as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    iterations: u64,
    /// Statistic computed over each depth's iterations
    #[arg(long, value_enum)]
    method: StatMethod,
    /// Accept rows whose iteration columns do not split into one block per header depth
    #[arg(long)]
    allow_partial_windows: bool,
}

#[derive(Debug, Args)]
struct JsonpArgs {
    /// JSONP file obtained from the rarefaction curve data
    #[arg(long = "jsonp")]
    jsonp: PathBuf,
    /// Output path prefix; the table is written to <PREFIX>.tsv
    #[arg(long = "out-prefix", value_name = "PREFIX")]
    out_prefix: PathBuf,
    /// Match braces when unwrapping the JSONP callback (accepts nested objects)
    #[arg(long)]
    balanced: bool,
}

/// Parse arguments, run the selected pipeline and map the outcome to an exit code.
pub fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(path) => {
            info!(path = %path.display(), "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Run the selected subcommand and return the written table path.
pub fn run(cli: Cli) -> Result<PathBuf> {
    let load = LoadOptions {
        observer: Some(Arc::new(TracingObserver)),
        ..Default::default()
    };

    match cli.command {
        Commands::Csv(args) => {
            let options = CsvSummaryOptions {
                iterations: usize::try_from(args.iterations).context("--iterations is too large")?,
                method: args.method,
                check_depth_count: !args.allow_partial_windows,
            };
            run_csv(&args.csv, &args.out_prefix, &options, &load)
                .with_context(|| format!("summarising {}", args.csv.display()))
        }
        Commands::Jsonp(args) => {
            let options = JsonpSummaryOptions {
                extraction: if args.balanced {
                    JsonpExtraction::Balanced
                } else {
                    JsonpExtraction::FirstBrace
                },
            };
            run_jsonp(&args.jsonp, &args.out_prefix, &options, &load)
                .with_context(|| format!("summarising {}", args.jsonp.display()))
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
}
