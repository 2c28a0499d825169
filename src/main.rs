use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::{Args, Parser, Subcommand};
use log::{error, info};

use phonesieve::batch::{batch_csv_by_date, DEFAULT_MAX_BATCH_SIZE};
use phonesieve::etl::{read_orders, write_artifacts};
use phonesieve::pipeline::{run_pipeline, Summary};

#[derive(Debug, Parser)]
#[command(
    name = "phonesieve",
    version,
    about = "Extracts, validates and batches phone numbers from order-note exports"
)]
struct Cli {
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Extract and validate phone numbers from tab-separated order exports
    Extract(ExtractArgs),
    /// Split a numbers CSV into date-preserving batches
    Batch(BatchArgs),
}

#[derive(Debug, Args)]
struct ExtractArgs {
    /// Order exports with id_order, date_order and note columns
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Directory the CSV artifacts and the summary log are written to
    #[arg(long, short)]
    output_dir: PathBuf,
}

#[derive(Debug, Args)]
struct BatchArgs {
    /// CSV with a date_order column, typically the unique-numbers artifact
    input: PathBuf,
    /// Output path pattern containing a `{}` batch-index placeholder
    output_pattern: String,
    /// Maximum records per batch; a single date may still exceed it
    #[arg(default_value_t = DEFAULT_MAX_BATCH_SIZE)]
    max_batch_size: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Extract(args) => extract(args),
        Command::Batch(args) => {
            let batches =
                batch_csv_by_date(&args.input, &args.output_pattern, args.max_batch_size)
                    .with_context(|| format!("batch {}", args.input.display()))?;
            println!("Successfully created {batches} batch files.");
            Ok(())
        }
    }
}

fn extract(args: ExtractArgs) -> Result<()> {
    // A lone input propagates its error; in a multi-file run a failing file
    // is skipped so the rest of the exports still get processed.
    if let [input] = args.inputs.as_slice() {
        return process_file(input, &args.output_dir)
            .with_context(|| format!("process {}", input.display()));
    }
    for input in &args.inputs {
        if let Err(err) = process_file(input, &args.output_dir) {
            error!("skipping {}: {err:#}", input.display());
        }
    }
    Ok(())
}

fn process_file(input: &Path, output_dir: &Path) -> Result<()> {
    let rows = read_orders(input)?;
    let output = run_pipeline(&rows);
    let summary = Summary::from_tables(&rows, &output);
    write_artifacts(output_dir, input, &output, &summary)?;
    info!(
        "{}: {} valid, {} unique, {} invalid numbers",
        input.display(),
        summary.valid,
        summary.unique,
        summary.invalid
    );
    Ok(())
}
